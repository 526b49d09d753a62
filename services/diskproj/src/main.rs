//! Disk deprojection demo.
//!
//! Deprojects an inclined disk over an image grid, writes the galactocentric
//! radius map to a FITS file, and projects a single disk-plane point back onto
//! the sky.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use disk_fits::{write_image, Card};
use disk_projection::{deproject_grid, project_point, sky_position};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::DiskConfig;

#[derive(Parser, Debug)]
#[command(name = "diskproj")]
#[command(about = "Sky-plane <-> disk-plane coordinate transforms for an inclined disk")]
struct Args {
    /// YAML configuration file
    #[arg(short, long, env = "DISKPROJ_CONFIG")]
    config: Option<PathBuf>,

    /// Grid extent along the first axis
    #[arg(long)]
    width: Option<usize>,

    /// Grid extent along the second axis
    #[arg(long)]
    height: Option<usize>,

    /// Inclination in degrees (0 = face-on)
    #[arg(long)]
    inclination: Option<f64>,

    /// Position angle of the major axis in degrees
    #[arg(long)]
    position_angle: Option<f64>,

    /// Disk center, first axis (pixels)
    #[arg(long, allow_hyphen_values = true)]
    center_x: Option<f64>,

    /// Disk center, second axis (pixels)
    #[arg(long, allow_hyphen_values = true)]
    center_y: Option<f64>,

    /// Pixel scale in arcsec per pixel
    #[arg(long)]
    pixel_scale: Option<f64>,

    /// Radius cutoff in arcsec
    #[arg(long)]
    max_radius: Option<f64>,

    /// Sample point radius in arcsec
    #[arg(long, allow_hyphen_values = true)]
    radius: Option<f64>,

    /// Sample point azimuth in radians
    #[arg(long, allow_hyphen_values = true)]
    theta: Option<f64>,

    /// Output FITS file for the radius map
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip writing the FITS file
    #[arg(long)]
    no_write: bool,

    /// Print a JSON summary of the deprojected field
    #[arg(long)]
    summary: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn apply(&self, config: &mut DiskConfig) {
        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.inclination {
            config.inclination_deg = v;
        }
        if let Some(v) = self.position_angle {
            config.position_angle_deg = v;
        }
        if let Some(v) = self.center_x {
            config.center.0 = v;
        }
        if let Some(v) = self.center_y {
            config.center.1 = v;
        }
        if let Some(v) = self.pixel_scale {
            config.pixel_scale = v;
        }
        if let Some(v) = self.max_radius {
            config.max_radius = v;
        }
        if let Some(v) = self.radius {
            config.sample.radius = v;
        }
        if let Some(v) = self.theta {
            config.sample.theta = v;
        }
        if let Some(v) = &self.output {
            config.output = v.clone();
        }
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

fn geometry_cards(config: &DiskConfig) -> Vec<Card> {
    let mut cards = vec![
        Card::text("BUNIT", "arcsec").comment("galactocentric radius"),
        Card::real("INCLIN", config.inclination_deg).comment("inclination [deg]"),
        Card::real("POSANG", config.position_angle_deg).comment("position angle [deg]"),
        Card::real("XCENTER", config.center.0).comment("disk center, axis 2 [pix]"),
        Card::real("YCENTER", config.center.1).comment("disk center, axis 1 [pix]"),
        Card::real("PIXSCALE", config.pixel_scale).comment("[arcsec/pix]"),
    ];
    // An unbounded cutoff has no header representation.
    if config.max_radius.is_finite() {
        cards.push(Card::real("RMAX", config.max_radius).comment("radius cutoff [arcsec]"));
    }
    cards
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args)?;

    let mut config = DiskConfig::load(args.config.as_deref()).context("loading configuration")?;
    args.apply(&mut config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    let size = config.grid_size()?;
    let geometry = config.geometry();
    info!(
        width = size.width(),
        height = size.height(),
        inclination_deg = geometry.inclination_deg,
        position_angle_deg = geometry.position_angle_deg,
        center_x = geometry.center.0,
        center_y = geometry.center.1,
        pixel_scale = geometry.pixel_scale,
        max_radius = geometry.max_radius,
        "Deprojecting disk"
    );

    let field = deproject_grid(size, &geometry);
    let summary = field.summary();
    info!(
        retained = summary.retained,
        masked = summary.masked,
        "Deprojection complete"
    );
    if summary.retained == 0 {
        warn!("No pixel lies inside the radius cutoff");
    }

    if args.no_write {
        info!("Skipping FITS output");
    } else {
        write_image(&config.output, &field.rg, &geometry_cards(&config))
            .with_context(|| format!("writing {}", config.output.display()))?;
        println!("Saved deprojected radius map to {}", config.output.display());
    }

    if args.summary {
        println!("{}", summary.to_json()?);
    }

    let sample = config.sample;
    let sky = project_point(sample.radius, sample.theta, &geometry);
    let exact = sky_position(sample.radius, sample.theta, &geometry);
    println!(
        "Projected (r={}, theta={}) -> xsky={:.6}, ysky={:.6}",
        sample.radius, sample.theta, sky.xsky, sky.ysky
    );
    println!(
        "Exact inverse of the deprojection -> i={:.6}, j={:.6}",
        exact.xsky, exact.ysky
    );

    Ok(())
}
