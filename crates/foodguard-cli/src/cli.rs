//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use foodguard::Strategy;

/// FoodGuard: structure AI food adulteration analyses
#[derive(Parser)]
#[command(name = "foodguard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify analysis text into sections
    Classify {
        /// Text file to classify (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Classification strategy
        #[arg(long, default_value = "line")]
        strategy: StrategyChoice,
    },

    /// Build a report from a saved analysis endpoint response
    Inspect {
        /// Path to the response body (JSON)
        #[arg(value_name = "RESPONSE_FILE")]
        file: PathBuf,

        /// HTTP status the response was received with
        #[arg(long, default_value = "200")]
        status: u16,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a barcode and print the request body
    Barcode {
        /// Barcode digits
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Serve the classifier as a JSON API
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Classification strategy
        #[arg(long, default_value = "line")]
        strategy: StrategyChoice,
    },
}

/// Classification strategy selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyChoice {
    /// Heading-driven, line-by-line classification
    Line,
    /// Whole-text sentence filters
    Sentence,
}

impl From<StrategyChoice> for Strategy {
    fn from(choice: StrategyChoice) -> Self {
        match choice {
            StrategyChoice::Line => Strategy::LineBased,
            StrategyChoice::Sentence => Strategy::SentenceFilter,
        }
    }
}
