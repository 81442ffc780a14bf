use crate::data::DataError;
use crate::domain::StationRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load the station dataset from a CSV file with a header row. Row order
/// is preserved; the caller treats the result as immutable.
pub fn load_stations(path: &Path) -> Result<Vec<StationRecord>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_stations(file)
}

/// Parse station rows from any reader. Split out from the file open so
/// the parsing rules are testable without touching the filesystem.
pub fn read_stations<R: Read>(reader: R) -> Result<Vec<StationRecord>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: StationRecord = row?;
        records.push(record);
    }
    Ok(records)
}
