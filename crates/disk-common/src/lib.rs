//! Common types shared by the disk-projection crates.
//!
//! The sky plane is the observed pixel frame of an image; the disk plane is
//! the intrinsic frame of a tilted circular disk, described by galactocentric
//! radius and azimuthal angle.

pub mod error;
pub mod geometry;
pub mod grid;

pub use error::{DiskError, DiskResult};
pub use geometry::{DiskGeometry, DiskPoint, GridSize, SkyPoint};
pub use grid::GridArray;
