//! Projection of disk-plane points onto the sky.
//!
//! [`project`] evaluates the classic single-point formula used with the
//! deprojected maps. Its y component is the exact inverse of the
//! deprojection; its x component applies the radius scaling to the cos(theta)
//! term only, so away from `theta = 0, π` it does not land back on the pixel
//! the point was deprojected from. [`sky_position`] is the exact inverse.

use disk_common::{DiskGeometry, SkyPoint};

use crate::orientation::Orientation;

/// Sky-plane position of the disk point `(radius, theta)`.
///
/// # Arguments
/// * `radius` - Galactocentric radius in arcsec; negative values mirror the point
/// * `theta` - Azimuthal angle in radians
/// * `inclination_deg` - Disk tilt in degrees
/// * `position_angle_deg` - Major-axis orientation in degrees
/// * `center` - Disk center `(x0, y0)` in pixels
/// * `pixel_scale` - Arcsec per pixel; zero gives infinite coordinates
pub fn project(
    radius: f64,
    theta: f64,
    inclination_deg: f64,
    position_angle_deg: f64,
    center: (f64, f64),
    pixel_scale: f64,
) -> SkyPoint {
    let geometry = DiskGeometry::new(
        inclination_deg,
        position_angle_deg,
        center,
        pixel_scale,
        f64::INFINITY,
    );
    project_point(radius, theta, &geometry)
}

/// [`project`] for a prepared geometry. The radius cutoff is ignored.
pub fn project_point(radius: f64, theta: f64, geometry: &DiskGeometry) -> SkyPoint {
    let o = Orientation::new(geometry);
    let (x0, y0) = geometry.center;
    let (sin_t, cos_t) = theta.sin_cos();
    let r = radius / o.scale;

    let xsky = -r * cos_t * o.sin_pa + sin_t * o.cos_pa * o.cos_inc + x0;
    let ysky = r * (cos_t * o.cos_pa - sin_t * o.sin_pa * o.cos_inc) + y0;

    SkyPoint::new(xsky, ysky)
}

/// Pixel `(i, j)` that deprojects to `(radius, theta)`.
///
/// Inverts the rotation and foreshortening of the deprojection exactly,
/// returned as `SkyPoint { xsky: i, ysky: j }`.
pub fn sky_position(radius: f64, theta: f64, geometry: &DiskGeometry) -> SkyPoint {
    let o = Orientation::new(geometry);
    let (x0, y0) = geometry.center;
    let (sin_t, cos_t) = theta.sin_cos();
    let r = radius / o.scale;

    let di = -r * (cos_t * o.sin_pa + sin_t * o.cos_inc * o.cos_pa);
    let dj = r * (cos_t * o.cos_pa - sin_t * o.cos_inc * o.sin_pa);

    SkyPoint::new(x0 + di, y0 + dj)
}
