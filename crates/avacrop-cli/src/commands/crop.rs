use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use avacrop_core::config::CropConfig;
use avacrop_core::geometry::Offset;
use avacrop_core::io::{load_source, save_png};
use avacrop_core::session::CropSession;

/// Geometry flags shared by the rendering commands.
#[derive(Args)]
pub struct GeometryArgs {
    /// Zoom scale; values below the minimum covering scale are clamped up
    /// (default: the minimum)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Horizontal pan offset in viewport pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset_x: f64,

    /// Vertical pan offset in viewport pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub offset_y: f64,

    /// Viewport side in logical pixels (overrides config)
    #[arg(long)]
    pub viewport: Option<u32>,

    /// Export side in pixels (overrides config)
    #[arg(long)]
    pub size: Option<u32>,

    /// Crop config TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct CropArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Output PNG path
    #[arg(short, long, default_value = "avatar.png")]
    pub output: PathBuf,
}

pub fn run(args: &CropArgs) -> Result<()> {
    let mut session = build_session(&args.file, &args.geometry)?;
    let export = session.export().context("No source image to export")?;

    crate::summary::print_crop_summary(&session, &args.file);

    save_png(&export, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

/// Resolve config and geometry flags into a session with the requested
/// (clamped) state applied.
pub(crate) fn build_session(file: &Path, geom: &GeometryArgs) -> Result<CropSession> {
    let mut config = match &geom.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str::<CropConfig>(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => CropConfig::default(),
    };
    if let Some(v) = geom.viewport {
        config.viewport_size = v;
    }
    if let Some(s) = geom.size {
        config.export_size = s;
    }
    config.validate()?;

    let source = load_source(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    debug!(
        "loaded {}x{} source, viewport {}",
        source.width(),
        source.height(),
        config.viewport_size
    );

    let mut session = CropSession::new(config);
    session.source_ready(source)?;
    if let Some(scale) = geom.scale {
        session.set_scale(scale);
    }
    session.pan_to(Offset::new(geom.offset_x, geom.offset_y));

    Ok(session)
}
