use serde::{Deserialize, Deserializer};

/// One row of the station dataset.
///
/// Numeric fields are parsed leniently: a blank or malformed value becomes
/// zero, matching the coercion the dataset was published with. A zero
/// longitude or latitude is a sentinel meaning "location unknown".
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub cume: u64,
    #[serde(rename = "TSR", default, deserialize_with = "lenient_f64")]
    pub tsr: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub newscasts: u64,
}

impl StationRecord {
    /// True when both coordinates are usable (neither is the `0` sentinel).
    pub fn has_location(&self) -> bool {
        self.longitude != 0.0 && self.latitude != 0.0
    }

    /// `newscasts` is the sole discriminator of station class.
    pub const fn class(&self) -> StationClass {
        if self.newscasts == 0 {
            StationClass::NonParticipant
        } else {
            StationClass::Participant
        }
    }

    /// Value of the active sizing metric.
    #[allow(clippy::cast_precision_loss)]
    pub fn metric(&self, mode: MetricMode) -> f64 {
        match mode {
            MetricMode::Cume => self.cume as f64,
            MetricMode::Tsr => self.tsr,
        }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0.0))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationClass {
    Participant,
    NonParticipant,
}

impl StationClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Participant => "participant",
            Self::NonParticipant => "nonparticipant",
        }
    }

    /// Human form used by the tooltip slug.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Participant => "participant",
            Self::NonParticipant => "non-participant",
        }
    }
}

/// Which metric drives marker radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricMode {
    #[default]
    Cume,
    Tsr,
}

impl MetricMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cume => "cume",
            Self::Tsr => "TSR",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cume => "CUME",
            Self::Tsr => "TSR",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cume" => Some(Self::Cume),
            "tsr" => Some(Self::Tsr),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Cume => Self::Tsr,
            Self::Tsr => Self::Cume,
        }
    }

    /// Radius range in canvas units for the linear scale.
    pub const fn radius_range(self) -> (f64, f64) {
        match self {
            Self::Cume => (3.0, 60.0),
            Self::Tsr => (5.0, 50.0),
        }
    }

    /// The cume scale clamps a zero domain minimum so a cluster of
    /// zero-cume stations does not flatten the whole scale.
    pub const fn domain_floor(self) -> Option<f64> {
        match self {
            Self::Cume => Some(8.0),
            Self::Tsr => None,
        }
    }
}

/// The four mutually exclusive display modes. Exactly one is active at a
/// time; Comparison is the implicit default when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    All,
    Participating,
    NonParticipating,
    #[default]
    Comparison,
}

impl FilterMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "show-all",
            Self::Participating => "show-participants",
            Self::NonParticipating => "show-non-participants",
            Self::Comparison => "comparison",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::All),
            1 => Some(Self::Participating),
            2 => Some(Self::NonParticipating),
            3 => Some(Self::Comparison),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "participating" => Some(Self::Participating),
            "nonparticipating" => Some(Self::NonParticipating),
            "comparison" => Some(Self::Comparison),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All stations",
            Self::Participating => "Participating",
            Self::NonParticipating => "Non-participating",
            Self::Comparison => "Comparison",
        }
    }

    /// Help text shown for the mode. `All` has none: it restores the
    /// original text captured at startup.
    pub const fn help_text(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Participating => Some(
                "This map displays only those stations that are contributing \
                 newscasts to the network. Look for larger circles (stations \
                 with a higher CUME) to see stations reaching more listeners.",
            ),
            Self::NonParticipating => Some(
                "This map displays only those stations that are not \
                 contributing newscasts to the network. Look for larger \
                 circles (stations with a higher CUME) for potential \
                 opportunities.",
            ),
            Self::Comparison => Some(
                "Participating stations, those that have uploaded newscasts \
                 to the network, are green; non-participating stations do not \
                 have newscasts and are gray. Larger circles indicate \
                 stations with a higher CUME.",
            ),
        }
    }

    /// Whether a station of the given class is shown under this mode.
    pub const fn shows(self, class: StationClass) -> bool {
        match self {
            Self::All | Self::Comparison => true,
            Self::Participating => matches!(class, StationClass::Participant),
            Self::NonParticipating => matches!(class, StationClass::NonParticipant),
        }
    }
}
