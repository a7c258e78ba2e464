//! Random placeholder strategies and the model router.

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::{
    cli::types::{ModelKind, PlayerId, StrategyName},
    error::{DraftError, Result},
};

use super::strategy::{FullRosterStrategy, PickContext, SinglePickStrategy, Strategy};

/// Which protocol the strategy should speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    /// One pick per turn
    Dynamic,
    /// Whole roster in one call
    Static,
}

/// Uniformly random single pick from the remaining pool.
pub struct RandomDynamicBaseline {
    name: StrategyName,
    rng: StdRng,
}

impl RandomDynamicBaseline {
    pub const KIND: &'static str = "RandomDynamicBaseline";

    pub fn new(seq: usize, seed: u64) -> Self {
        Self {
            name: StrategyName::new(Self::KIND, seq),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SinglePickStrategy for RandomDynamicBaseline {
    fn name(&self) -> &StrategyName {
        &self.name
    }

    fn predict(&mut self, ctx: &PickContext<'_>) -> Result<PlayerId> {
        ctx.pool
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| DraftError::EmptyPool {
                strategy: self.name.to_string(),
            })
    }
}

/// Uniformly random roster, sampled without replacement.
pub struct RandomStaticBaseline {
    name: StrategyName,
    rng: StdRng,
}

impl RandomStaticBaseline {
    pub const KIND: &'static str = "RandomStaticBaseline";

    pub fn new(seq: usize, seed: u64) -> Self {
        Self {
            name: StrategyName::new(Self::KIND, seq),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FullRosterStrategy for RandomStaticBaseline {
    fn name(&self) -> &StrategyName {
        &self.name
    }

    fn predict(&mut self, ctx: &PickContext<'_>) -> Result<Vec<PlayerId>> {
        Ok(ctx
            .pool
            .choose_multiple(&mut self.rng, ctx.roster_size)
            .copied()
            .collect())
    }
}

/// Build the strategy for `kind` in the given mode.
///
/// `seq` is the 1-based position of the model on the command line; it names
/// the strategy and offsets `seed` so identical models draw differently.
pub fn build_strategy(kind: ModelKind, mode: DraftMode, seq: usize, seed: u64) -> Strategy {
    let seed = seed.wrapping_add(seq as u64);
    match (kind, mode) {
        (ModelKind::Random, DraftMode::Dynamic) => {
            Strategy::single_pick(RandomDynamicBaseline::new(seq, seed))
        }
        (ModelKind::Random, DraftMode::Static) => {
            Strategy::full_roster(RandomStaticBaseline::new(seq, seed))
        }
    }
}
