use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scan a product barcode and score it against WHO/FDA nutrition benchmarks.
#[derive(Parser, Debug)]
#[command(name = "nutrition-analyst")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file (default: nutrition_analyst.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// HTTP timeout in seconds for database lookups.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Log level or filter directive (e.g. "debug", "nutrition_analyst_rs=trace").
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a barcode; prompts interactively when none is given.
    Scan {
        /// 8-13 digit product barcode.
        barcode: Option<String>,
    },

    /// Read the barcode from an image file, then analyze it.
    Image {
        /// Image containing the barcode (png/jpg).
        path: PathBuf,
    },

    /// Score a saved OpenFoodFacts product response without network access.
    Score {
        /// JSON file with the API response.
        file: PathBuf,

        /// Barcode to report for the product (defaults to the response's code).
        #[arg(long)]
        barcode: Option<String>,
    },

    /// Analyze every barcode in a CSV file and write a CSV report.
    Batch {
        /// CSV file with a `barcode` column.
        input: PathBuf,

        /// Output CSV report.
        #[arg(short, long, default_value = "nutrition_report.csv")]
        output: PathBuf,
    },

    /// Show the scoring benchmark table.
    Thresholds,

    /// List the scientific sources behind the scores.
    Citations,
}

impl Default for Command {
    fn default() -> Self {
        Command::Scan { barcode: None }
    }
}
