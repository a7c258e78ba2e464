//! Command implementations for the draft evaluation CLI

pub mod draft;
pub mod evaluate;

#[cfg(test)]
mod tests;

use tracing::info;

use crate::{Result, SEED_ENV_VAR};

/// Pick the RNG seed: explicit value, else `DRAFT_EVAL_SEED`, else fresh entropy.
///
/// The chosen seed is logged so a run can be repeated.
pub fn resolve_seed(seed: Option<u64>) -> Result<u64> {
    let seed = match seed {
        Some(seed) => seed,
        None => match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => raw.trim().parse()?,
            Err(_) => rand::random(),
        },
    };
    info!(seed, "baseline seed");
    Ok(seed)
}
