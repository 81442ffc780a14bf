//! Albers-USA composite projection.
//!
//! Three conic equal-area projections stitched together the way
//! d3.geo.albersUsa does it: the lower 48 at full scale, Alaska at 35%
//! in the lower-left corner, Hawaii beside it. Configured once with a
//! scale factor and a translate offset; `project` is pure after that.

const DEG: f64 = std::f64::consts::PI / 180.0;

/// One conic equal-area projection with d3-style rotate/center/scale/translate.
#[derive(Debug, Clone, Copy)]
struct ConicEqualArea {
    n: f64,
    c: f64,
    rho0: f64,
    rotate: f64,
    center: (f64, f64),
    scale: f64,
    translate: (f64, f64),
}

impl ConicEqualArea {
    fn new(
        parallels: (f64, f64),
        rotate: f64,
        center: (f64, f64),
        scale: f64,
        translate: (f64, f64),
    ) -> Self {
        let phi1 = parallels.0 * DEG;
        let phi2 = parallels.1 * DEG;
        let n = (phi1.sin() + phi2.sin()) / 2.0;
        let c = phi1.cos().mul_add(phi1.cos(), 2.0 * n * phi1.sin());
        let rho0 = c.sqrt() / n;
        let mut projection = Self {
            n,
            c,
            rho0,
            rotate,
            center: (0.0, 0.0),
            scale,
            translate,
        };
        // The center is given in rotated coordinates and pins the point
        // that maps exactly onto the translate offset.
        projection.center = projection.raw(center.0, center.1);
        projection
    }

    /// Unit-sphere forward projection; `lon` is already rotated.
    fn raw(&self, lon: f64, lat: f64) -> (f64, f64) {
        let rho = (2.0 * self.n).mul_add(-(lat * DEG).sin(), self.c).sqrt() / self.n;
        let theta = self.n * lon * DEG;
        (rho * theta.sin(), rho.mul_add(-theta.cos(), self.rho0))
    }

    fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = self.raw(lon + self.rotate, lat);
        (
            self.scale.mul_add(x - self.center.0, self.translate.0),
            self.scale.mul_add(self.center.1 - y, self.translate.1),
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlbersUsa {
    lower48: ConicEqualArea,
    alaska: ConicEqualArea,
    hawaii: ConicEqualArea,
}

impl AlbersUsa {
    /// Scale and translate are in output (canvas pixel) units. The inset
    /// scale ratios and offsets are the d3 constants.
    pub fn new(scale: f64, translate: (f64, f64)) -> Self {
        let (tx, ty) = translate;
        Self {
            lower48: ConicEqualArea::new((29.5, 45.5), 96.0, (-0.6, 38.7), scale, (tx, ty)),
            alaska: ConicEqualArea::new(
                (55.0, 65.0),
                154.0,
                (-2.0, 58.5),
                0.35 * scale,
                (0.307f64.mul_add(-scale, tx), 0.201f64.mul_add(scale, ty)),
            ),
            hawaii: ConicEqualArea::new(
                (8.0, 18.0),
                157.0,
                (-3.0, 19.9),
                scale,
                (0.205f64.mul_add(-scale, tx), 0.212f64.mul_add(scale, ty)),
            ),
        }
    }

    /// Map `(longitude, latitude)` to canvas coordinates, y growing
    /// downward. Total over all inputs; the caller owns sentinel handling.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        if lat >= 50.0 {
            self.alaska.project(lon, lat)
        } else if lon <= -140.0 {
            self.hawaii.project(lon, lat)
        } else {
            self.lower48.project(lon, lat)
        }
    }
}
