//! The strategy capability plugged into the allocator.
//!
//! A strategy either picks one player per turn ([`SinglePickStrategy`]) or
//! names its whole roster at once ([`FullRosterStrategy`]). The allocator
//! matches on [`Strategy`] to choose the turn-by-turn or one-shot protocol.

use crate::{
    cli::types::{PlayerId, StrategyName},
    error::Result,
    storage::DraftInput,
};

/// What a strategy sees when asked for a pick.
#[derive(Debug, Clone, Copy)]
pub struct PickContext<'a> {
    /// The full instance input, including the untouched draft class.
    pub input: &'a DraftInput,
    /// Players still available right now.
    pub pool: &'a [PlayerId],
    /// Players this strategy has drafted so far in this instance.
    pub roster: &'a [PlayerId],
    /// Target roster size.
    pub roster_size: usize,
}

pub trait SinglePickStrategy {
    fn name(&self) -> &StrategyName;

    /// Pick one player from `ctx.pool`.
    fn predict(&mut self, ctx: &PickContext<'_>) -> Result<PlayerId>;
}

pub trait FullRosterStrategy {
    fn name(&self) -> &StrategyName;

    /// Pick up to `ctx.roster_size` distinct players from `ctx.pool`.
    fn predict(&mut self, ctx: &PickContext<'_>) -> Result<Vec<PlayerId>>;
}

pub enum Strategy {
    SinglePick(Box<dyn SinglePickStrategy>),
    FullRoster(Box<dyn FullRosterStrategy>),
}

impl Strategy {
    pub fn single_pick(strategy: impl SinglePickStrategy + 'static) -> Self {
        Strategy::SinglePick(Box::new(strategy))
    }

    pub fn full_roster(strategy: impl FullRosterStrategy + 'static) -> Self {
        Strategy::FullRoster(Box::new(strategy))
    }

    pub fn name(&self) -> &StrategyName {
        match self {
            Strategy::SinglePick(s) => s.name(),
            Strategy::FullRoster(s) => s.name(),
        }
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::SinglePick(s) => write!(f, "SinglePick({})", s.name()),
            Strategy::FullRoster(s) => write!(f, "FullRoster({})", s.name()),
        }
    }
}
