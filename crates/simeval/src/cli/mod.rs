//! Command line interface
//!
//! | Subcommand | Description |
//! |------------|-------------|
//! | `cosine-pairings` | Similarity record for every pairing, written as JSON |
//! | `accuracy` | Best-threshold accuracy of a cosine-pairings file |
//! | `evaluate` | Both steps at once, printing the accuracy message |
//! | `compare` | Accuracy before and after a projection matrix |
//! | `augment-negatives` | Balance a pairing set with synthetic negatives |
//! | `split` | Label-stratified train/test split |
//! | `inspect` | Label counts of a pairing file |

mod commands;

pub use commands::execute;

use clap::{Parser, Subcommand};
use simeval_domain::ZeroNormPolicy;
use simeval_domain::error::Result;
use simeval_infrastructure::config::ConfigLoader;
use simeval_infrastructure::logging::init_logging;
use std::path::PathBuf;

/// Command line interface for simeval
#[derive(Parser, Debug)]
#[command(name = "simeval")]
#[command(about = "Evaluate how well cosine similarity separates similar from dissimilar text pairs")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Zero-norm vector policy (`error` or `nan`), overriding the configuration
    #[arg(long, global = true)]
    pub zero_norm: Option<ZeroNormPolicy>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// simeval subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Compute the cosine similarity of every pairing
    CosinePairings {
        /// Embeddings JSON (`text -> vector`)
        #[arg(long)]
        embeddings: PathBuf,
        /// Pairings JSON, or JSON Lines with a `.jsonl` extension
        #[arg(long)]
        pairings: PathBuf,
        /// Where to write the `[similarity, label]` records
        #[arg(long)]
        output: PathBuf,
        /// Projection matrix (`.npy`) applied to both embeddings first
        #[arg(long)]
        matrix: Option<PathBuf>,
    },

    /// Sweep thresholds over a cosine-pairings file
    Accuracy {
        /// Records written by `cosine-pairings`
        #[arg(long)]
        cosine_pairings: PathBuf,
        /// Where to write the accuracy result
        #[arg(long)]
        output: PathBuf,
    },

    /// Compute similarities and accuracy in one step
    Evaluate {
        /// Embeddings JSON (`text -> vector`)
        #[arg(long)]
        embeddings: PathBuf,
        /// Pairings JSON, or JSON Lines with a `.jsonl` extension
        #[arg(long)]
        pairings: PathBuf,
        /// Projection matrix (`.npy`) applied to both embeddings first
        #[arg(long)]
        matrix: Option<PathBuf>,
        /// Also write the accuracy result as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compare accuracy without and with a projection matrix
    Compare {
        /// Embeddings JSON (`text -> vector`)
        #[arg(long)]
        embeddings: PathBuf,
        /// Pairings JSON, or JSON Lines with a `.jsonl` extension
        #[arg(long)]
        pairings: PathBuf,
        /// Projection matrix (`.npy`)
        #[arg(long)]
        matrix: PathBuf,
        /// Also write both results as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Add synthetic negatives until negatives match positives
    AugmentNegatives {
        /// Pairings JSON, or JSON Lines with a `.jsonl` extension
        #[arg(long)]
        pairings: PathBuf,
        /// Where to write the augmented pairings
        #[arg(long)]
        output: PathBuf,
        /// Shuffle seed, overriding `augment.seed`
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Split pairings into train and test sets, stratified by label
    Split {
        /// Pairings JSON, or JSON Lines with a `.jsonl` extension
        #[arg(long)]
        pairings: PathBuf,
        /// Where to write the training pairings
        #[arg(long)]
        train_output: PathBuf,
        /// Where to write the test pairings
        #[arg(long)]
        test_output: PathBuf,
        /// Fraction held out for testing, overriding `split.test_fraction`
        #[arg(long)]
        test_fraction: Option<f64>,
        /// Shuffle seed, overriding `split.seed`
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print label counts of a pairing file
    Inspect {
        /// Pairings JSON, or JSON Lines with a `.jsonl` extension
        #[arg(long)]
        pairings: PathBuf,
    },
}

/// Load configuration, install logging and run the selected subcommand
///
/// Command output goes to stdout; diagnostics go to stderr.
pub fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(policy) = cli.zero_norm {
        config.evaluation.zero_norm = policy;
    }

    init_logging(&config.logging)?;

    let stdout = std::io::stdout();
    execute(&cli.command, &config, &mut stdout.lock())
}
