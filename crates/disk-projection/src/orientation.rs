//! Trigonometric terms of a disk orientation, evaluated once per call.

use disk_common::DiskGeometry;

/// Sines and cosines of the position angle and inclination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub sin_pa: f64,
    pub cos_pa: f64,
    pub cos_inc: f64,
    /// Arcsec per pixel
    pub scale: f64,
}

impl Orientation {
    pub fn new(geometry: &DiskGeometry) -> Self {
        let pa = geometry.position_angle_rad();
        let inc = geometry.inclination_rad();
        Self {
            sin_pa: pa.sin(),
            cos_pa: pa.cos(),
            cos_inc: inc.cos(),
            scale: geometry.pixel_scale,
        }
    }

    /// Disk-plane `(xg, yg)` in arcsec for a pixel offset `(di, dj)` from the
    /// disk center.
    ///
    /// Rotates the offset by the position angle, then stretches the axis
    /// perpendicular to the line of nodes by `1 / cos(inclination)`.
    #[inline]
    pub fn disk_offsets(&self, di: f64, dj: f64) -> (f64, f64) {
        let asc = self.scale;
        let xg = -di * asc * self.sin_pa + dj * asc * self.cos_pa;
        let yg = -(di * asc * self.cos_pa + dj * asc * self.sin_pa) / self.cos_inc;
        (xg, yg)
    }
}
