//! Magic CLI - replay pointer traces against scene files without a window.

mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use interaction::EventKind;
use log::LevelFilter;
use logger::MagicLogger;
use sketch::{replay, Scene};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Magic CLI - headless scene playback
#[derive(Parser)]
#[command(name = "magic-cli")]
#[command(about = "Replay pointer input against Mathemagical scenes")]
struct Cli {
    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    /// Also append log lines to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scene's pointer trace and print each frame's draw calls as JSON
    Replay {
        /// Scene file
        scene: PathBuf,

        /// Number of frames to run (default: one per pointer sample)
        #[arg(short, long)]
        frames: Option<usize>,

        /// Pretty-print each frame
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a scene file and summarize it
    Check {
        /// Scene file
        scene: PathBuf,
    },

    /// List supported event names in dispatch order
    Events,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    MagicLogger::init(cli.log_level, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Replay {
            scene,
            frames,
            pretty,
        } => run_replay(&scene, frames, pretty),
        Commands::Check { scene } => check(&scene),
        Commands::Events => {
            for kind in EventKind::iter() {
                println!("{kind}");
            }
            Ok(())
        }
    }
}

fn load(path: &Path) -> Result<Scene> {
    Scene::load(path).with_context(|| format!("Failed to load scene {}", path.display()))
}

fn run_replay(path: &Path, frames: Option<usize>, pretty: bool) -> Result<()> {
    let mut scene = load(path)?;
    let outputs = replay(&mut scene, frames);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for output in &outputs {
        let json = if pretty {
            serde_json::to_string_pretty(output)?
        } else {
            serde_json::to_string(output)?
        };
        writeln!(out, "{json}")?;
    }
    log::info!("replayed {} frames of {}", outputs.len(), path.display());
    Ok(())
}

fn check(path: &Path) -> Result<()> {
    let scene = load(path)?;
    let window = scene.window();
    println!(
        "{}: canvas {}x{}, origin ({}, {}), scale ({}, {}), {} pointer samples",
        path.display(),
        scene.canvas_size().x,
        scene.canvas_size().y,
        window.origin().x(),
        window.origin().y(),
        window.scale().x,
        window.scale().y,
        scene.pointer_trace().len(),
    );

    for (index, entry) in scene.entries().iter().enumerate() {
        let mut behaviours = Vec::new();
        if let Some(controller) = entry.drag() {
            let deactivated: Vec<String> = EventKind::iter()
                .filter(|kind| !controller.is_default_active(*kind))
                .map(|kind| kind.to_string())
                .collect();
            if deactivated.is_empty() {
                behaviours.push("drag".to_string());
            } else {
                behaviours.push(format!("drag (without {})", deactivated.join(", ")));
            }
        }
        if let Some(rotation) = entry.rotation() {
            behaviours.push(format!(
                "rotate {} rad by {} per frame",
                rotation.angle(),
                rotation.step()
            ));
        }
        if behaviours.is_empty() {
            behaviours.push("static".to_string());
        }
        println!(
            "  [{index}] {} {}: {}",
            entry.shape.kind(),
            entry.shape.id(),
            behaviours.join("; ")
        );
    }
    Ok(())
}
