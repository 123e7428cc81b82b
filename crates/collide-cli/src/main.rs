//! Collide CLI - render and apply exponential envelopes from the command line.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "collide")]
#[command(author, version, about = "Collide envelope tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an envelope to WAV or CSV
    Render(commands::render::RenderArgs),

    /// Apply an envelope to an audio file
    Vca(commands::vca::VcaArgs),

    /// Track the amplitude of an audio file
    Follow(commands::follow::FollowArgs),

    /// Pan a mono file into stereo (equal power)
    Pan(commands::pan::PanArgs),

    /// List, show, and save envelope presets
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Vca(args) => commands::vca::run(args),
        Commands::Follow(args) => commands::follow::run(args),
        Commands::Pan(args) => commands::pan::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
