//! Season statistics: the category catalog, typed season records and
//! per-player aggregation.
//!
//! - `catalog`: weighted scoring categories and the roster size they imply
//! - `season`: game-level rows for one season
//! - `aggregate`: per-player totals by category

pub mod aggregate;
pub mod catalog;
pub mod season;


pub use aggregate::{games_started, rookies, season_by_category, veterans, PlayerTotals};
pub use catalog::{Category, CATEGORIES, GAMES_STARTED, PERSON_ID, ROSTER_SIZE};
pub use season::{GameRow, SeasonRecord};
