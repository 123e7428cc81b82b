//! Preset management commands.
//!
//! Provides commands to list, show, and save envelope presets.

use super::common::{KnobArgs, format_time, load_preset};
use clap::{Args, Subcommand};
use collide_config::factory_presets;
use collide_env::map_stage_time;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory presets
    List,

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,

        /// Print the preset as TOML
        #[arg(long)]
        toml: bool,
    },

    /// Save a preset (with optional overrides) to a TOML file
    Save {
        /// Source preset name or path
        name: String,

        /// Destination file
        path: PathBuf,

        /// Name stored in the new preset
        #[arg(long = "name")]
        new_name: Option<String>,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        #[command(flatten)]
        knobs: KnobArgs,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List => list_presets(),
        PresetsCommand::Show { name, toml } => show_preset(&name, toml),
        PresetsCommand::Save {
            name,
            path,
            new_name,
            description,
            knobs,
            force,
        } => save_preset(&name, &path, new_name, description, &knobs, force),
    }
}

fn list_presets() -> anyhow::Result<()> {
    println!("Factory Presets:");
    println!("================");
    for preset in factory_presets() {
        let desc = preset.description.as_deref().unwrap_or("");
        println!("  {:12} [{:7}] - {}", preset.name, preset.mode, desc);
    }
    println!();
    Ok(())
}

fn show_preset(name: &str, as_toml: bool) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    if as_toml {
        print!("{}", preset.to_toml()?);
        return Ok(());
    }

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {desc}");
        println!();
    }

    println!("Mode:        {}", preset.mode);
    println!("Sample Rate: {} Hz", preset.sample_rate);
    println!();

    let atv = &preset.attenuverters;
    println!("  {:8} {:>6} {:>12} {:>6}", "Stage", "Knob", "Time", "ATV");
    for (stage, knob, cv) in [
        ("attack", preset.attack, atv.attack),
        ("decay", preset.decay, atv.decay),
        ("release", preset.release, atv.release),
    ] {
        println!(
            "  {:8} {:>6.2} {:>12} {:>+6.2}",
            stage,
            knob,
            format_time(map_stage_time(knob)),
            cv
        );
    }
    println!(
        "  {:8} {:>6.2} {:>12} {:>+6.2}",
        "sustain", preset.sustain, "(level)", atv.sustain
    );

    if let Err(e) = preset.validate() {
        println!();
        println!("Warning: {e}");
    }
    Ok(())
}

fn save_preset(
    name: &str,
    path: &Path,
    new_name: Option<String>,
    description: Option<String>,
    knobs: &KnobArgs,
    force: bool,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "File '{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let mut preset = load_preset(name)?;
    if let Some(new_name) = new_name {
        preset.name = new_name;
    }
    if description.is_some() {
        preset.description = description;
    }
    knobs.apply(&mut preset);
    preset.validate()?;
    preset.save(path)?;

    println!("Saved preset '{}' to {}", preset.name, path.display());
    Ok(())
}
