//! FITS output for 2-D disk maps.
//!
//! Writes a single primary HDU holding one `f64` image plane (BITPIX = -64),
//! which is all the deprojection pipeline needs to hand a radius map to
//! standard astronomy tooling. Implemented directly rather than through a
//! FITS library; only the primary-image subset of the format is produced.

pub mod card;
pub mod writer;

pub use card::{Card, CardValue};
pub use writer::{encode_image, write_image, BLOCK_SIZE};
