//! Disk geometry and the value types produced by the transforms.

use serde::{Deserialize, Serialize};

use crate::{DiskError, DiskResult};

/// Dimensions of the evaluation grid.
///
/// `width` is the extent of the first array axis (index `i`), `height` the
/// extent of the second (index `j`). Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    /// Create a grid size, rejecting empty dimensions.
    pub fn new(width: usize, height: usize) -> DiskResult<Self> {
        if width == 0 {
            return Err(DiskError::invalid_argument("grid_size", "width must be >= 1"));
        }
        if height == 0 {
            return Err(DiskError::invalid_argument("grid_size", "height must be >= 1"));
        }
        if width.checked_mul(height).is_none() {
            return Err(DiskError::invalid_argument(
                "grid_size",
                format!("{}x{} cells overflows usize", width, height),
            ));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells; cannot overflow, `new` checks it.
    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

impl TryFrom<(usize, usize)> for GridSize {
    type Error = DiskError;

    fn try_from((width, height): (usize, usize)) -> DiskResult<Self> {
        Self::new(width, height)
    }
}

/// Orientation and scale of a tilted circular disk on the sky.
///
/// Angles are in degrees. An inclination of 0 is face-on, 90 is edge-on; the
/// deprojection is only well defined on `[0, 90)`. Values are not validated:
/// singular inputs produce NaN or infinite coordinates downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskGeometry {
    /// Disk tilt in degrees
    pub inclination_deg: f64,
    /// Major-axis orientation in degrees, measured from the sky's North axis
    pub position_angle_deg: f64,
    /// Pixel-frame position of the disk center (x0, y0)
    pub center: (f64, f64),
    /// Angular scale in arcsec per pixel
    pub pixel_scale: f64,
    /// Disk-plane radius cutoff in arcsec
    pub max_radius: f64,
}

impl DiskGeometry {
    pub fn new(
        inclination_deg: f64,
        position_angle_deg: f64,
        center: (f64, f64),
        pixel_scale: f64,
        max_radius: f64,
    ) -> Self {
        Self {
            inclination_deg,
            position_angle_deg,
            center,
            pixel_scale,
            max_radius,
        }
    }

    /// Same geometry with a different radius cutoff.
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = max_radius;
        self
    }

    /// Geometry with no effective radius cutoff.
    pub fn unbounded(self) -> Self {
        self.with_max_radius(f64::INFINITY)
    }

    pub fn inclination_rad(&self) -> f64 {
        self.inclination_deg.to_radians()
    }

    pub fn position_angle_rad(&self) -> f64 {
        self.position_angle_deg.to_radians()
    }

    /// True when the inclination is at or past the edge-on singularity.
    pub fn is_edge_on(&self) -> bool {
        self.inclination_deg.abs() >= 90.0
    }
}

/// Disk-plane coordinates of a single sky pixel.
///
/// `rg`, `xg`, `yg` are in arcsec and `psig` in radians. All four are NaN when
/// the pixel lies beyond the radius cutoff; `psig` alone is NaN at the exact
/// disk center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskPoint {
    pub rg: f64,
    pub xg: f64,
    pub yg: f64,
    pub psig: f64,
}

impl DiskPoint {
    /// True when the point was masked by the radius cutoff.
    pub fn is_masked(&self) -> bool {
        self.rg.is_nan()
    }
}

/// Pixel-frame position on the sky.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyPoint {
    pub xsky: f64,
    pub ysky: f64,
}

impl SkyPoint {
    pub fn new(xsky: f64, ysky: f64) -> Self {
        Self { xsky, ysky }
    }

    /// Pixel distance from `center`.
    pub fn distance_from(&self, center: (f64, f64)) -> f64 {
        (self.xsky - center.0).hypot(self.ysky - center.1)
    }

    pub fn is_finite(&self) -> bool {
        self.xsky.is_finite() && self.ysky.is_finite()
    }
}

impl From<SkyPoint> for (f64, f64) {
    fn from(p: SkyPoint) -> Self {
        (p.xsky, p.ysky)
    }
}
