//! Draft allocation: the shared pool, the strategy capability, the random
//! baselines and the snake-draft allocator.

pub mod allocator;
pub mod baseline;
pub mod pool;
pub mod strategy;


pub use allocator::{snake_order, DraftOutcome, DraftPhase, DraftedRoster, Pick, SnakeDraft};
pub use baseline::{build_strategy, DraftMode, RandomDynamicBaseline, RandomStaticBaseline};
pub use pool::DraftPool;
pub use strategy::{FullRosterStrategy, PickContext, SinglePickStrategy, Strategy};
