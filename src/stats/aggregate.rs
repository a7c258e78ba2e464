//! Per-player aggregation over a season record.

use std::collections::BTreeMap;

use crate::{
    cli::types::PlayerId,
    error::{DraftError, Result},
};

use super::{catalog::GAMES_STARTED, season::SeasonRecord};

/// Player id → aggregate value for one category.
pub type PlayerTotals = BTreeMap<PlayerId, f64>;

/// Sum `category` over each player's game rows and multiply by `weight`.
///
/// For [`GAMES_STARTED`] the value is the player's row count instead and
/// `weight` is ignored. Players without rows are absent from the result.
/// A column the season does not carry is a data-format error.
pub fn season_by_category(
    season: &SeasonRecord,
    category: &str,
    weight: f64,
) -> Result<PlayerTotals> {
    if category == GAMES_STARTED {
        return Ok(games_started(season));
    }
    if !season.has_column(category) {
        return Err(DraftError::missing(category));
    }

    let mut sums = PlayerTotals::new();
    for row in season.rows() {
        *sums.entry(row.person_id).or_insert(0.0) += row.stat(category);
    }
    for total in sums.values_mut() {
        *total *= weight;
    }
    Ok(sums)
}

/// Number of games each player appeared in.
pub fn games_started(season: &SeasonRecord) -> PlayerTotals {
    let mut counts = PlayerTotals::new();
    for row in season.rows() {
        *counts.entry(row.person_id).or_insert(0.0) += 1.0;
    }
    counts
}

/// Draft-class players with no game in `season`, in draft-class order.
pub fn rookies(season: &SeasonRecord, draft_class: &[PlayerId]) -> Vec<PlayerId> {
    let seen = season.players();
    draft_class
        .iter()
        .filter(|pid| !seen.contains(pid))
        .copied()
        .collect()
}

/// Draft-class players with at least one game in `season`, in draft-class order.
pub fn veterans(season: &SeasonRecord, draft_class: &[PlayerId]) -> Vec<PlayerId> {
    let seen = season.players();
    draft_class
        .iter()
        .filter(|pid| seen.contains(pid))
        .copied()
        .collect()
}
