//! Coordinate transforms between the sky plane and the plane of an inclined
//! circular disk.
//!
//! - [`deproject`] maps every pixel of an image grid to galactocentric radius,
//!   disk-plane Cartesian coordinates and azimuthal angle.
//! - [`project`] maps one disk-plane point `(radius, theta)` onto the sky.
//! - [`sky_position`] is the exact algebraic inverse of the deprojection.
//!
//! All functions are pure. Singular cells (the disk center, an edge-on disk,
//! cells beyond the radius cutoff) come back as NaN or infinite values rather
//! than errors; only an empty grid is rejected.
//!
//! # Example
//!
//! ```
//! use disk_projection::{deproject, project};
//!
//! let field = deproject((256, 256), 60.0, 30.0, (128.0, 128.0), 1.0, 100.0).unwrap();
//! assert_eq!(field.rg.get(128, 128), Some(0.0));
//!
//! let p = project(10.0, std::f64::consts::PI, 60.0, 30.0, (128.0, 128.0), 1.0);
//! assert!(p.is_finite());
//! ```

pub mod deproject;
pub mod orientation;
pub mod project;
pub mod select;

pub use deproject::{deproject, deproject_grid, deproject_point, DeprojectedField, FieldSummary};
pub use orientation::Orientation;
pub use project::{project, project_point, sky_position};

pub use disk_common::{DiskError, DiskGeometry, DiskPoint, DiskResult, GridArray, GridSize, SkyPoint};
