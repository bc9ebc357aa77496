//! handsign - Classify hand landmark frames and record training samples

mod input;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use handsign_classify::{poses, GestureClassifier};
use handsign_core::Gesture;
use handsign_samples::{Sample, SampleStore, StoreConfig, DEFAULT_DATA_DIR};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "handsign", version, about = "Static hand gesture classifier")]
struct Cli {
    /// Training sample directory
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Write sample files without indentation
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one frame or an array of frames
    Classify {
        file: PathBuf,

        /// Also list every matching gesture, in priority order
        #[arg(long)]
        matches: bool,
    },

    /// Store every frame in FILE as a sample of GESTURE
    Record {
        #[arg(long)]
        gesture: Gesture,

        file: PathBuf,
    },

    /// Show stored sample counts per gesture
    Dataset,

    /// Classify every stored sample against its label
    Evaluate,

    /// Print the reference frame for a gesture as JSON
    Pose { gesture: Gesture },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handsign=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = StoreConfig {
        data_dir: cli.data_dir,
        pretty: !cli.compact,
    };
    let classifier = GestureClassifier::new();

    match cli.command {
        Command::Classify { file, matches } => {
            let frames = input::read_frames(&file)?;
            for (i, frame) in frames.iter().enumerate() {
                let gesture = classifier.classify(frame);
                if matches {
                    let all = classifier
                        .matching(frame)
                        .iter()
                        .map(|g| g.name())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("{i}\t{gesture}\t[{all}]");
                } else {
                    println!("{i}\t{gesture}");
                }
            }
        }

        Command::Record { gesture, file } => {
            if gesture == Gesture::None {
                bail!("{gesture} is not a recordable gesture");
            }
            let frames = input::read_frames(&file)?;
            let store = SampleStore::open(config).context("opening sample store")?;
            for frame in frames {
                let path = store.save(&Sample::new(gesture, frame))?;
                println!("{}", path.display());
            }
            info!(%gesture, dir = %store.data_dir().display(), "recorded samples");
        }

        Command::Dataset => {
            let store = SampleStore::new(config);
            let dataset = store.load_all()?;
            for gesture in Gesture::all().iter().filter(|g| g.is_some()) {
                println!("{:<12}{}", gesture.name(), dataset.frames(*gesture).len());
            }
            println!("{:<12}{}", "total", dataset.len());
        }

        Command::Evaluate => {
            let store = SampleStore::new(config);
            let dataset = store.load_all()?;
            if dataset.is_empty() {
                bail!("no samples under {}", store.data_dir().display());
            }

            let evaluation = dataset.evaluate(|frame| classifier.classify(frame));
            for (gesture, score) in &evaluation.scores {
                println!(
                    "{:<12}{:>4}/{:<4} {:>6.1}%",
                    gesture.name(),
                    score.hits,
                    score.total,
                    score.accuracy() * 100.0
                );
            }
            for ((expected, predicted), count) in &evaluation.confusions {
                println!("  {expected} -> {predicted}: {count}");
            }
            println!(
                "{:<12}{:>4}/{:<4} {:>6.1}%",
                "overall",
                evaluation.hits(),
                evaluation.total(),
                evaluation.accuracy() * 100.0
            );
        }

        Command::Pose { gesture } => {
            let Some(frame) = poses::reference(gesture) else {
                bail!("no static reference pose for {gesture}");
            };
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
    }

    Ok(())
}
