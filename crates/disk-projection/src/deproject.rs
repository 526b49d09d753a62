//! Deprojection of a sky-plane pixel grid into disk-plane coordinates.

use disk_common::{DiskGeometry, DiskPoint, DiskResult, GridArray, GridSize};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::orientation::Orientation;
use crate::select::{azimuth, correct_azimuths, fill_nan_where, mask_above, raw_azimuth};

/// Per-pixel disk-plane coordinates over an image grid.
///
/// All four arrays share the grid's shape. Cells beyond the radius cutoff are
/// NaN in every array.
#[derive(Debug, Clone)]
pub struct DeprojectedField {
    /// Galactocentric radius (arcsec)
    pub rg: GridArray<f64>,
    /// Disk-plane x (arcsec)
    pub xg: GridArray<f64>,
    /// Disk-plane y (arcsec)
    pub yg: GridArray<f64>,
    /// Azimuthal angle in `[0, 2π)` (radians)
    pub psig: GridArray<f64>,
}

impl DeprojectedField {
    pub fn size(&self) -> GridSize {
        self.rg.size()
    }

    /// All four coordinates of pixel `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Option<DiskPoint> {
        Some(DiskPoint {
            rg: self.rg.get(i, j)?,
            xg: self.xg.get(i, j)?,
            yg: self.yg.get(i, j)?,
            psig: self.psig.get(i, j)?,
        })
    }

    /// Counts of retained and masked cells.
    pub fn summary(&self) -> FieldSummary {
        let (retained, max_radius_found) = self
            .rg
            .as_slice()
            .iter()
            .filter(|r| !r.is_nan())
            .fold((0usize, None::<f64>), |(n, max), &r| {
                (n + 1, Some(max.map_or(r, |m| m.max(r))))
            });
        let size = self.size();

        FieldSummary {
            width: size.width(),
            height: size.height(),
            retained,
            masked: size.cells() - retained,
            max_radius_found,
        }
    }
}

/// Overview of a deprojected field, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub width: usize,
    pub height: usize,
    /// Cells inside the radius cutoff
    pub retained: usize,
    /// Cells set to NaN by the cutoff
    pub masked: usize,
    /// Largest retained radius (arcsec)
    pub max_radius_found: Option<f64>,
}

impl FieldSummary {
    /// Pretty-printed JSON report.
    pub fn to_json(&self) -> DiskResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Deproject every pixel of a `(width, height)` grid.
///
/// # Arguments
/// * `grid_size` - `(W, H)`; `i` runs over the first axis, `j` the second
/// * `inclination_deg` - Disk tilt, 0 = face-on
/// * `position_angle_deg` - Major-axis orientation from North
/// * `center` - Disk center `(x0, y0)` in pixels, may lie outside the grid
/// * `pixel_scale` - Arcsec per pixel
/// * `max_radius` - Radius cutoff in arcsec
///
/// Fails only for an empty grid.
pub fn deproject(
    grid_size: (usize, usize),
    inclination_deg: f64,
    position_angle_deg: f64,
    center: (f64, f64),
    pixel_scale: f64,
    max_radius: f64,
) -> DiskResult<DeprojectedField> {
    let size = GridSize::try_from(grid_size)?;
    let geometry = DiskGeometry::new(
        inclination_deg,
        position_angle_deg,
        center,
        pixel_scale,
        max_radius,
    );
    Ok(deproject_grid(size, &geometry))
}

/// Deproject every pixel of `size` for the given disk.
pub fn deproject_grid(size: GridSize, geometry: &DiskGeometry) -> DeprojectedField {
    if geometry.is_edge_on() {
        warn!(
            inclination_deg = geometry.inclination_deg,
            "edge-on inclination; disk-plane y is singular"
        );
    }

    let orient = Orientation::new(geometry);
    let (x0, y0) = geometry.center;
    let height = size.height();

    let mut xg = vec![0.0f64; size.cells()];
    let mut yg = vec![0.0f64; size.cells()];

    xg.par_chunks_mut(height)
        .zip(yg.par_chunks_mut(height))
        .enumerate()
        .for_each(|(i, (x_row, y_row))| {
            let di = i as f64 - x0;
            for (j, (x, y)) in x_row.iter_mut().zip(y_row.iter_mut()).enumerate() {
                (*x, *y) = orient.disk_offsets(di, j as f64 - y0);
            }
        });

    let mut rg: Vec<f64> = xg
        .par_iter()
        .zip(yg.par_iter())
        .map(|(&x, &y)| (x * x + y * y).sqrt())
        .collect();

    let mut psig: Vec<f64> = xg
        .par_iter()
        .zip(yg.par_iter())
        .map(|(&x, &y)| raw_azimuth(x, y))
        .collect();
    correct_azimuths(&mut psig, &xg, &yg);

    let outside = mask_above(&rg, geometry.max_radius);
    for values in [&mut rg, &mut xg, &mut yg, &mut psig] {
        fill_nan_where(values, &outside);
    }

    let field = DeprojectedField {
        rg: into_grid(size, rg),
        xg: into_grid(size, xg),
        yg: into_grid(size, yg),
        psig: into_grid(size, psig),
    };

    debug!(
        width = size.width(),
        height = size.height(),
        masked = outside.iter().filter(|&&m| m).count(),
        max_radius = geometry.max_radius,
        "deprojected grid"
    );

    field
}

/// Deproject a single, possibly fractional, pixel `(i, j)`.
///
/// Evaluates the same formula, quadrant rules and cutoff as
/// [`deproject_grid`], so integer pixels agree with the grid exactly.
pub fn deproject_point(i: f64, j: f64, geometry: &DiskGeometry) -> DiskPoint {
    let orient = Orientation::new(geometry);
    let (x0, y0) = geometry.center;
    let (xg, yg) = orient.disk_offsets(i - x0, j - y0);
    let rg = (xg * xg + yg * yg).sqrt();

    if rg > geometry.max_radius {
        return DiskPoint {
            rg: f64::NAN,
            xg: f64::NAN,
            yg: f64::NAN,
            psig: f64::NAN,
        };
    }

    DiskPoint {
        rg,
        xg,
        yg,
        psig: azimuth(xg, yg),
    }
}

fn into_grid(size: GridSize, data: Vec<f64>) -> GridArray<f64> {
    GridArray::from_vec(size, data).expect("cell count matches grid size")
}
