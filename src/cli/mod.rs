//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::ModelKind;

/// Arguments shared by both draft commands
#[derive(Debug, Args)]
pub struct DraftIo {
    /// JSON-lines file with one draft instance per line.
    #[clap(long = "in", visible_alias = "input", short = 'i')]
    pub input: PathBuf,

    /// Output folder; one `<StrategyName>.jsonl` file is written per strategy.
    #[clap(long, short, default_value = "./tmp.out")]
    pub out: PathBuf,

    /// RNG seed for the random baselines (or set `DRAFT_EVAL_SEED` env var).
    #[clap(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Parser)]
#[clap(
    name = "draft-eval",
    about = "Snake-draft allocation and roster scoring for fantasy draft predictions"
)]
pub struct DraftEval {
    /// Log at debug level.
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a snake draft between several models, one pick at a time.
    ///
    /// Pick order reverses after every round; all models share one pool per
    /// instance, so their rosters never overlap.
    Draft {
        #[clap(flatten)]
        io: DraftIo,

        /// Comma-separated models in first-round pick order: `random,random`.
        #[clap(long, short, value_delimiter = ',', required = true)]
        models: Vec<ModelKind>,
    },

    /// Let a single model predict a whole roster per instance in one shot.
    StaticDraft {
        #[clap(flatten)]
        io: DraftIo,

        /// Model to run.
        #[clap(long, short)]
        model: ModelKind,
    },

    /// Score predicted rosters against the gold next-season statistics.
    Evaluate {
        /// Gold JSON-lines file (carries `next season`).
        #[clap(long, short)]
        gold: PathBuf,

        /// Predicted JSON-lines file (carries `output`).
        #[clap(long, short)]
        pred: PathBuf,

        /// Print the scores as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
