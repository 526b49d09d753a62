//! Writing a deprojected radius map to disk.

use disk_fits::{write_image, Card, BLOCK_SIZE};
use disk_projection::deproject;
use test_utils::fixtures::geometry::REFERENCE;
use test_utils::scratch_dir;

#[test]
fn test_write_reference_radius_map() {
    let g = REFERENCE;
    let field = deproject(
        (g.width, g.height),
        g.inclination_deg,
        g.position_angle_deg,
        g.center,
        g.pixel_scale,
        g.max_radius,
    )
    .unwrap();

    let dir = scratch_dir();
    let path = dir.path().join("radiusgal.fits");
    let extra = [
        Card::real("INCLIN", g.inclination_deg).comment("inclination [deg]"),
        Card::real("POSANG", g.position_angle_deg).comment("position angle [deg]"),
    ];
    write_image(&path, &field.rg, &extra).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len() % BLOCK_SIZE, 0);
    assert!(bytes.starts_with(b"SIMPLE  ="));

    // One header block, then 256 * 256 doubles padded up to 183 blocks.
    assert_eq!(bytes.len(), BLOCK_SIZE + 183 * BLOCK_SIZE);

    // Center pixel (128, 128) sits at offset 128 * 256 + 128 in the data unit.
    let k = BLOCK_SIZE + (128 * 256 + 128) * 8;
    let center = f64::from_be_bytes(bytes[k..k + 8].try_into().unwrap());
    assert_eq!(center, 0.0);

    // Corner pixel is outside the cutoff.
    let corner = f64::from_be_bytes(bytes[BLOCK_SIZE..BLOCK_SIZE + 8].try_into().unwrap());
    assert!(corner.is_nan());
}

#[test]
fn test_write_to_missing_directory_fails() {
    let dir = scratch_dir();
    let path = dir.path().join("no-such-dir").join("out.fits");
    let field = deproject((4, 4), 0.0, 0.0, (2.0, 2.0), 1.0, 10.0).unwrap();
    let err = write_image(&path, &field.rg, &[]).unwrap_err();
    assert_eq!(err.kind(), "Io");
}
