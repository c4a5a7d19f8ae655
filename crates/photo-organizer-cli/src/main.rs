use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use photo_organizer_core::{logging, BucketMode, Config, Organizer};

#[derive(Parser)]
#[command(name = "photo-organizer")]
#[command(about = "Sort photos and videos into a date-bucketed folder tree")]
#[command(version)]
struct Cli {
    /// Directory of photos and videos to organize. Prompted for
    /// interactively when omitted.
    directory: Option<PathBuf>,

    /// Bucket granularity for the output tree [default: weekly]
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Output directory (default: the input directory with "-organized"
    /// appended)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show debug detail on the console as well as in the log file
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Weekly,
    Monthly,
    Yearly,
}

impl From<Mode> for BucketMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Weekly => BucketMode::Weekly,
            Mode::Monthly => BucketMode::Monthly,
            Mode::Yearly => BucketMode::Yearly,
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    // Parse command line arguments; more than one positional argument is a
    // usage error reported by clap before any work starts.
    let cli = Cli::parse();

    // Set up configuration
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    // Override config with command line arguments
    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if cli.output.is_some() {
        config.output_dir = cli.output.clone();
    }

    let console_level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    logging::init_logger(&config.log_dir, console_level)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let input_dir = match cli.directory {
        Some(dir) => dir,
        None => prompt_for_directory()?,
    };

    info!("Started processing.");
    let mut organizer = Organizer::new(config);
    match organizer.run(&input_dir) {
        Ok(summary) => {
            info!("Finished processing {} files.", summary.total());
            Ok(())
        }
        Err(e) => {
            error!("Exception while processing: {e}");
            Err(e.into())
        }
    }
}

/// Ask for the input directory on stdin when none was given on the command
/// line. Keeps drag-and-drop invocation working.
fn prompt_for_directory() -> Result<PathBuf, anyhow::Error> {
    print!("Drag the photos folder here and press Enter/Return: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input directory from stdin")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        anyhow::bail!("no input directory provided");
    }
    Ok(PathBuf::from(trimmed))
}
