//! Type-safe wrappers and enums shared by the CLI and the engine.

pub mod ids;
pub mod model;


pub use ids::{PlayerId, Uid};
pub use model::{ModelKind, StrategyName};
