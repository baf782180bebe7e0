use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use avacrop_core::config::CropConfig;
use avacrop_core::geometry::{min_scale, pan_bounds};
use avacrop_core::io::load_source;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Viewport side in logical pixels
    #[arg(long)]
    pub viewport: Option<u32>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = load_source(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let (w, h) = source.dimensions();

    let viewport = args
        .viewport
        .unwrap_or(CropConfig::default().viewport_size);
    let min = min_scale(w, h, viewport);
    let (max_x, max_y) = pan_bounds(min, w, h, viewport);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", w, h);
    println!("Viewport:    {}px", viewport);
    println!("Min scale:   {:.4}", min);
    println!("Pan bounds:  \u{00b1}{:.1} x \u{00b1}{:.1} (at min scale)", max_x, max_y);

    Ok(())
}
