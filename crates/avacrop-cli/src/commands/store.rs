use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use avacrop_core::io::encode_png;
use avacrop_core::storage::{AvatarStore, DirStore};

use super::crop::{build_session, GeometryArgs};

#[derive(Args)]
pub struct StoreArgs {
    /// Input image file
    pub file: PathBuf,

    /// Destination key for the stored avatar (e.g. a user id)
    #[arg(long)]
    pub key: String,

    /// Root directory of the avatar store
    #[arg(long)]
    pub root: PathBuf,

    #[command(flatten)]
    pub geometry: GeometryArgs,
}

pub fn run(args: &StoreArgs) -> Result<()> {
    let mut session = build_session(&args.file, &args.geometry)?;
    let export = session.export().context("No source image to export")?;

    crate::summary::print_crop_summary(&session, &args.file);

    let bytes = encode_png(&export)?;
    let store = DirStore::new(&args.root);
    let url = store.put(&args.key, &bytes)?;
    println!("Stored at {}", url);

    Ok(())
}
