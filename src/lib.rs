//! Fantasy Draft Evaluation Library
//!
//! Runs competing draft strategies against a shared pool of players and
//! scores the resulting rosters on the following season's box scores.
//!
//! ## Features
//!
//! - **Snake Draft Allocation**: Turn order reverses every round; rosters never overlap
//! - **Pluggable Strategies**: Single-pick or full-roster strategies behind one enum
//! - **Weighted Scoring**: Ten weighted box-score categories plus games played
//! - **Prediction Scoring**: Gold/predicted pairing by uid with per-instance and mean scores
//! - **JSON Lines Storage**: Streamed reading and writing of draft instances
//!
//! ## Quick Start
//!
//! ```rust
//! use draft_eval::{
//!     draft::{build_strategy, DraftMode, SnakeDraft},
//!     stats::SeasonRecord,
//!     storage::DraftInput,
//!     ModelKind, PlayerId, Uid,
//! };
//!
//! # fn example() -> draft_eval::Result<()> {
//! let input = DraftInput {
//!     uid: Uid::new("2023"),
//!     draft_class: (1..=30).map(PlayerId::new).collect(),
//!     last_season: SeasonRecord::default().into(),
//!     extra: Default::default(),
//! };
//!
//! let strategies = (1..=2)
//!     .map(|seq| build_strategy(ModelKind::Random, DraftMode::Dynamic, seq, 42))
//!     .collect();
//! let outcome = SnakeDraft::new(strategies).run(&input)?;
//! assert_eq!(outcome.rosters.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Fix the seed of the random baselines without passing `--seed`:
//! ```bash
//! export DRAFT_EVAL_SEED=42
//! ```

pub mod cli;
pub mod commands;
pub mod draft;
pub mod error;
pub mod scoring;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{ModelKind, PlayerId, StrategyName, Uid};
pub use error::{DraftError, Result};
pub use scoring::{score_predictions, score_team_on_season, PredictionScores};
pub use stats::{SeasonRecord, CATEGORIES, ROSTER_SIZE};

pub const SEED_ENV_VAR: &str = "DRAFT_EVAL_SEED";
