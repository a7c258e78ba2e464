//! Snake-draft allocation.
//!
//! Round 0 runs the strategies in the given order, round 1 in exactly the
//! reverse order, and so on. Every pick leaves the shared pool before the
//! next strategy is asked, so rosters are disjoint. When the pool runs dry
//! the draft stops on the spot, even mid-round.

use tracing::{debug, info};

use crate::{
    cli::types::{PlayerId, StrategyName},
    error::{DraftError, Result},
    stats::ROSTER_SIZE,
    storage::{DraftInput, Instance},
};

use super::{
    pool::DraftPool,
    strategy::{PickContext, Strategy},
};

/// Lifecycle of one instance's draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    Idle,
    Drafting,
    /// Pool emptied before every turn was played.
    Exhausted,
    /// Every turn was played.
    Complete,
}

/// One recorded pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub round: usize,
    /// Index into the allocator's strategy list.
    pub strategy: usize,
    pub player: PlayerId,
}

/// Result of drafting one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftOutcome {
    /// One roster per strategy, in strategy-list order.
    pub rosters: Vec<Vec<PlayerId>>,
    /// Picks in the order they were made.
    pub picks: Vec<Pick>,
    pub phase: DraftPhase,
    /// Players left in the pool when drafting stopped.
    pub undrafted: Vec<PlayerId>,
}

/// A strategy's roster wrapped with the instance input, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftedRoster {
    pub strategy: StrategyName,
    pub instance: Instance,
}

/// Turn order for `strategies` participants over `rounds` rounds, as
/// `(round, strategy index)` pairs.
///
/// ```rust
/// use draft_eval::draft::snake_order;
///
/// let order: Vec<usize> = snake_order(3, 2).into_iter().map(|(_, s)| s).collect();
/// assert_eq!(order, vec![0, 1, 2, 2, 1, 0]);
/// ```
pub fn snake_order(strategies: usize, rounds: usize) -> Vec<(usize, usize)> {
    (0..rounds)
        .flat_map(|round| {
            let forward = (0..strategies).map(move |s| (round, s));
            let backward = (0..strategies).rev().map(move |s| (round, s));
            if round % 2 == 0 {
                forward.collect::<Vec<_>>()
            } else {
                backward.collect::<Vec<_>>()
            }
        })
        .collect()
}

/// Runs snake drafts for a fixed list of strategies.
#[derive(Debug)]
pub struct SnakeDraft {
    strategies: Vec<Strategy>,
    rounds: usize,
    keep_full_record: bool,
}

impl SnakeDraft {
    /// Draft [`ROSTER_SIZE`] rounds.
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self {
            strategies,
            rounds: ROSTER_SIZE,
            keep_full_record: false,
        }
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Write drafted rosters onto the whole input record instead of a
    /// fresh `{input, output}` record, so top-level fields such as
    /// `next season` are kept.
    pub fn keeping_full_record(mut self) -> Self {
        self.keep_full_record = true;
        self
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn names(&self) -> Vec<StrategyName> {
        self.strategies.iter().map(|s| s.name().clone()).collect()
    }

    /// Draft one instance.
    ///
    /// Single-pick strategies are asked once per turn. A full-roster strategy
    /// is asked once, on its first turn, and its whole list is claimed then;
    /// its later turns are skipped.
    pub fn run(&mut self, input: &DraftInput) -> Result<DraftOutcome> {
        let mut pool = DraftPool::new(&input.draft_class);
        let mut rosters = vec![Vec::new(); self.strategies.len()];
        let mut served = vec![false; self.strategies.len()];
        let mut picks = Vec::new();
        let mut phase = DraftPhase::Idle;

        let order = snake_order(self.strategies.len(), self.rounds);
        let mut turns = order.iter().peekable();

        if !pool.is_empty() {
            phase = DraftPhase::Drafting;
        }
        while phase == DraftPhase::Drafting {
            let Some(&(round, idx)) = turns.next() else {
                phase = DraftPhase::Complete;
                break;
            };
            if served[idx] {
                continue;
            }

            let ctx = PickContext {
                input,
                pool: pool.remaining(),
                roster: &rosters[idx],
                roster_size: self.rounds,
            };
            let chosen = match &mut self.strategies[idx] {
                Strategy::SinglePick(strategy) => vec![strategy.predict(&ctx)?],
                Strategy::FullRoster(strategy) => {
                    served[idx] = true;
                    let roster = strategy.predict(&ctx)?;
                    if roster.len() > self.rounds {
                        return Err(DraftError::OversizedRoster {
                            uid: input.uid.clone(),
                            strategy: strategy.name().to_string(),
                            len: roster.len(),
                            max: self.rounds,
                        });
                    }
                    roster
                }
            };

            for player in chosen {
                if !pool.take(player) {
                    return Err(DraftError::InvalidPick {
                        uid: input.uid.clone(),
                        strategy: self.strategies[idx].name().to_string(),
                        player,
                    });
                }
                debug!(
                    uid = %input.uid,
                    round,
                    strategy = %self.strategies[idx].name(),
                    %player,
                    "pick"
                );
                rosters[idx].push(player);
                picks.push(Pick {
                    round,
                    strategy: idx,
                    player,
                });

                if pool.is_empty() {
                    phase = if turns.peek().is_some() {
                        DraftPhase::Exhausted
                    } else {
                        DraftPhase::Complete
                    };
                    break;
                }
            }
        }

        if phase == DraftPhase::Idle {
            phase = DraftPhase::Exhausted;
        }
        if phase == DraftPhase::Exhausted {
            info!(
                uid = %input.uid,
                picks = picks.len(),
                "draft class exhausted before all rosters were filled"
            );
        }

        Ok(DraftOutcome {
            rosters,
            picks,
            phase,
            undrafted: pool.remaining().to_vec(),
        })
    }

    /// Draft one instance and wrap each roster with the instance input.
    ///
    /// Every strategy gets an entry, even one that drafted nobody, so each
    /// output file lines up with the input file.
    pub fn draft_instance(&mut self, instance: &Instance) -> Result<Vec<DraftedRoster>> {
        let outcome = self.run(&instance.input)?;
        let keep_full_record = self.keep_full_record;
        Ok(self
            .strategies
            .iter()
            .zip(outcome.rosters)
            .map(|(strategy, roster)| DraftedRoster {
                strategy: strategy.name().clone(),
                instance: if keep_full_record {
                    instance.clone().into_output(roster)
                } else {
                    instance.with_output(roster)
                },
            })
            .collect())
    }
}
