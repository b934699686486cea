use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use trebuchet::input::DEFAULT_INPUT;
use trebuchet::{calibrate_file, CalibrationConfig, Vocabulary};

#[derive(Parser, Debug)]
#[command(version, about = "Sum the calibration values of a puzzle input")]
struct Args {
    /// Calibration document, one line per value
    #[arg(default_value = DEFAULT_INPUT)]
    input_file: PathBuf,

    /// Recognise digit characters only, not spelled-out number words
    #[arg(long)]
    digits_only: bool,

    /// Print the token pattern before the total
    #[arg(long)]
    pattern: bool,
}

impl From<Args> for CalibrationConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input_file,
            vocabulary: if args.digits_only {
                Vocabulary::Digits
            } else {
                Vocabulary::DigitsAndWords
            },
            show_pattern: args.pattern,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = CalibrationConfig::from(Args::parse());
    if config.show_pattern {
        println!("{}", config.vocabulary.pattern());
    }

    let t0 = Instant::now();
    let total = calibrate_file(&config)
        .with_context(|| format!("Could not calibrate {}", config.input.display()))?;
    info!("Summed calibration values in {:?}", t0.elapsed());

    println!("{}", total);
    Ok(())
}
