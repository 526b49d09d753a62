//! Common disk geometries for testing.
//!
//! Plain constants so that crates lower in the dependency graph can use them
//! without a cycle; convert with the consumer's own constructors.

/// Parameters of a test disk.
#[derive(Debug, Clone, Copy)]
pub struct GeometrySpec {
    pub width: usize,
    pub height: usize,
    pub inclination_deg: f64,
    pub position_angle_deg: f64,
    pub center: (f64, f64),
    pub pixel_scale: f64,
    pub max_radius: f64,
}

/// Named disk geometries.
pub mod geometry {
    use super::GeometrySpec;

    /// The canonical demo disk: 256x256 image, 60° inclination, PA 30°.
    pub const REFERENCE: GeometrySpec = GeometrySpec {
        width: 256,
        height: 256,
        inclination_deg: 60.0,
        position_angle_deg: 30.0,
        center: (128.0, 128.0),
        pixel_scale: 1.0,
        max_radius: 100.0,
    };

    /// Face-on disk, no foreshortening.
    pub const FACE_ON: GeometrySpec = GeometrySpec {
        width: 32,
        height: 24,
        inclination_deg: 0.0,
        position_angle_deg: 40.0,
        center: (15.5, 11.0),
        pixel_scale: 0.5,
        max_radius: f64::INFINITY,
    };

    /// PA 0° on an odd grid; the column through the center has `xg == 0`
    /// exactly, exercising the on-axis azimuth overrides.
    pub const AXIS_ALIGNED: GeometrySpec = GeometrySpec {
        width: 9,
        height: 9,
        inclination_deg: 45.0,
        position_angle_deg: 0.0,
        center: (4.0, 4.0),
        pixel_scale: 1.0,
        max_radius: f64::INFINITY,
    };

    /// Non-square grid with a center outside the image and sub-arcsec pixels.
    pub const OFF_CENTER: GeometrySpec = GeometrySpec {
        width: 40,
        height: 25,
        inclination_deg: 72.5,
        position_angle_deg: 123.0,
        center: (-3.25, 30.5),
        pixel_scale: 0.25,
        max_radius: 12.0,
    };
}
