//! topoclick: interactive EEG electrode explorer.
//!
//! # Usage
//!
//! ```bash
//! # Built-in demo dataset
//! topoclick
//!
//! # Your own dataset and viewer settings
//! topoclick --dataset session.json --config viewer.yaml
//!
//! # Write the demo dataset to disk
//! topoclick export-demo demo.json --epochs 40
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use topoclick::data::demo::{demo_averaged, demo_dataset};
use topoclick::{load_dataset, run_viewer, save_dataset, AmplitudeSource, Dataset, ViewerConfig};

const DEFAULT_DEMO_EPOCHS: usize = 30;

#[derive(Parser, Debug)]
#[command(name = "topoclick")]
#[command(author, version, about = "Click electrodes on a scalp map to compare their responses", long_about = None)]
struct Cli {
    /// Dataset JSON file; the built-in demo is used when omitted
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Viewer configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show averaged waveforms only (no ±1 SD band)
    #[arg(long)]
    averaged: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the demo dataset as JSON
    ExportDemo {
        /// Output file
        file: PathBuf,

        /// Number of epochs
        #[arg(short, long, default_value_t = DEFAULT_DEMO_EPOCHS)]
        epochs: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Some(Commands::ExportDemo { file, epochs }) = cli.command {
        let dataset = demo_dataset(epochs)?;
        save_dataset(&file, &dataset)?;
        log::info!("wrote demo dataset ({epochs} epochs) to {}", file.display());
        return Ok(());
    }

    let cfg = match &cli.config {
        Some(path) => ViewerConfig::load_yaml(path)?,
        None => ViewerConfig::default(),
    };

    let dataset = match &cli.dataset {
        Some(path) => {
            let ds = load_dataset(path)?;
            if cli.averaged {
                averaged(ds)?
            } else {
                ds
            }
        }
        None if cli.averaged => demo_averaged(DEFAULT_DEMO_EPOCHS)?,
        None => demo_dataset(DEFAULT_DEMO_EPOCHS)?,
    };

    run_viewer(dataset, cfg)?;
    Ok(())
}

/// Drop the per-epoch data, keeping only the evoked response.
fn averaged(dataset: Dataset) -> Result<Dataset, Box<dyn Error>> {
    if !dataset.has_epochs() {
        return Ok(dataset);
    }
    Ok(Dataset::new(
        dataset.channels().to_vec(),
        dataset.times().to_vec(),
        AmplitudeSource::Averaged(dataset.evoked().clone()),
    )?)
}
