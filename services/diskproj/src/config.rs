//! Run configuration.
//!
//! Layered: built-in defaults, then an optional YAML file, then `DISK_*`
//! environment variables. Command-line flags are applied last by `main`.

use std::path::{Path, PathBuf};

use disk_common::{DiskError, DiskGeometry, DiskResult, GridSize};
use serde::{Deserialize, Serialize};

/// Disk-plane point to project onto the sky.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Galactocentric radius (arcsec)
    pub radius: f64,
    /// Azimuthal angle (radians)
    pub theta: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            theta: std::f64::consts::PI,
        }
    }
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    /// Grid extent along the first axis
    pub width: usize,
    /// Grid extent along the second axis
    pub height: usize,
    pub inclination_deg: f64,
    pub position_angle_deg: f64,
    pub center: (f64, f64),
    /// Arcsec per pixel
    pub pixel_scale: f64,
    /// Radius cutoff (arcsec)
    pub max_radius: f64,
    pub sample: SampleConfig,
    /// FITS file receiving the radius map
    pub output: PathBuf,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            inclination_deg: 60.0,
            position_angle_deg: 30.0,
            center: (128.0, 128.0),
            pixel_scale: 1.0,
            max_radius: 100.0,
            sample: SampleConfig::default(),
            output: PathBuf::from("radiusgal.fits"),
        }
    }
}

impl DiskConfig {
    /// Defaults, overlaid with `path` (if any) and the process environment.
    pub fn load(path: Option<&Path>) -> DiskResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a YAML file; missing fields take their defaults.
    pub fn from_yaml_file(path: &Path) -> DiskResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| DiskError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> DiskResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Override fields from `DISK_*` variables returned by `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> DiskResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        fn parse<T: std::str::FromStr>(key: &str, raw: String) -> DiskResult<T> {
            raw.trim()
                .parse()
                .map_err(|_| DiskError::config(format!("{} has invalid value '{}'", key, raw)))
        }

        if let Some(v) = lookup("DISK_WIDTH") {
            self.width = parse("DISK_WIDTH", v)?;
        }
        if let Some(v) = lookup("DISK_HEIGHT") {
            self.height = parse("DISK_HEIGHT", v)?;
        }
        if let Some(v) = lookup("DISK_INCLINATION") {
            self.inclination_deg = parse("DISK_INCLINATION", v)?;
        }
        if let Some(v) = lookup("DISK_POSITION_ANGLE") {
            self.position_angle_deg = parse("DISK_POSITION_ANGLE", v)?;
        }
        if let Some(v) = lookup("DISK_CENTER_X") {
            self.center.0 = parse("DISK_CENTER_X", v)?;
        }
        if let Some(v) = lookup("DISK_CENTER_Y") {
            self.center.1 = parse("DISK_CENTER_Y", v)?;
        }
        if let Some(v) = lookup("DISK_PIXEL_SCALE") {
            self.pixel_scale = parse("DISK_PIXEL_SCALE", v)?;
        }
        if let Some(v) = lookup("DISK_MAX_RADIUS") {
            self.max_radius = parse("DISK_MAX_RADIUS", v)?;
        }
        if let Some(v) = lookup("DISK_OUTPUT") {
            self.output = PathBuf::from(v);
        }
        Ok(())
    }

    /// Reject values that would make the run meaningless.
    ///
    /// Stricter than the transforms themselves, which accept any float.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            ));
        }

        let finite = [
            ("inclination_deg", self.inclination_deg),
            ("position_angle_deg", self.position_angle_deg),
            ("center.x", self.center.0),
            ("center.y", self.center.1),
            ("pixel_scale", self.pixel_scale),
            ("sample.radius", self.sample.radius),
            ("sample.theta", self.sample.theta),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }

        if self.pixel_scale <= 0.0 {
            return Err("pixel_scale must be > 0".to_string());
        }

        if self.max_radius.is_nan() || self.max_radius < 0.0 {
            return Err("max_radius must be >= 0".to_string());
        }

        Ok(())
    }

    pub fn grid_size(&self) -> DiskResult<GridSize> {
        GridSize::new(self.width, self.height)
    }

    pub fn geometry(&self) -> DiskGeometry {
        DiskGeometry::new(
            self.inclination_deg,
            self.position_angle_deg,
            self.center,
            self.pixel_scale,
            self.max_radius,
        )
    }
}
