//! Model selectors and strategy naming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy family selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ModelKind {
    /// Uniformly random picks from the remaining pool
    Random,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Random => write!(f, "random"),
        }
    }
}

/// Name of one strategy instance, rendered as `<Kind>_<seq>`.
///
/// The sequence number is supplied by whoever builds the strategy, so two
/// strategies of the same kind in one draft stay distinguishable and output
/// files do not collide.
///
/// # Examples
///
/// ```rust
/// use draft_eval::StrategyName;
///
/// let name = StrategyName::new("RandomDynamicBaseline", 2);
/// assert_eq!(name.to_string(), "RandomDynamicBaseline_2");
/// assert_eq!(name.seq(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategyName {
    kind: String,
    seq: usize,
}

impl StrategyName {
    pub fn new(kind: impl Into<String>, seq: usize) -> Self {
        Self {
            kind: kind.into(),
            seq,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn seq(&self) -> usize {
        self.seq
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.seq)
    }
}
