mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "avacrop", about = "Avatar crop and export tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show source image dimensions and crop geometry
    Info(commands::info::InfoArgs),
    /// Render a square crop to a PNG file
    Crop(commands::crop::CropArgs),
    /// Render a square crop and hand it to the avatar store
    Store(commands::store::StoreArgs),
    /// Print or save the default crop config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Store(args) => commands::store::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
