//! Team and prediction scoring.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, Uid},
    error::{DraftError, Result},
    stats::{season_by_category, SeasonRecord, CATEGORIES, GAMES_STARTED},
    storage::Instance,
};


/// Contribution of a roster to each category, `gamesStarted` included.
pub fn score_breakdown(
    team: &[PlayerId],
    season: &SeasonRecord,
) -> Result<BTreeMap<&'static str, f64>> {
    let weighted = CATEGORIES.iter().map(|c| (c.name, c.weight));
    let appearances = std::iter::once((GAMES_STARTED, 1.0));

    weighted
        .chain(appearances)
        .map(|(name, weight)| -> Result<(&'static str, f64)> {
            let totals = season_by_category(season, name, weight)?;
            let value: f64 = team
                .iter()
                .map(|pid| totals.get(pid).copied().unwrap_or(0.0))
                .sum();
            Ok((name, value))
        })
        .collect()
}

/// Linear team score of `team` over `season`. Players without games add 0.
pub fn score_team_on_season(team: &[PlayerId], season: &SeasonRecord) -> Result<f64> {
    Ok(score_breakdown(team, season)?.values().sum())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceScore {
    pub uid: Uid,
    pub score: f64,
}

/// Per-instance scores in input order, plus their mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionScores {
    pub scores: Vec<InstanceScore>,
    pub combined: f64,
}

impl PredictionScores {
    pub fn values(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s.score).collect()
    }
}

/// Check that `gold` and `pred` line up one-to-one by uid, in order.
pub fn check_pairing(gold: &[Instance], pred: &[Instance]) -> Result<()> {
    if gold.len() != pred.len() {
        return Err(DraftError::LengthMismatch {
            gold: gold.len(),
            pred: pred.len(),
        });
    }
    for (index, (g, p)) in gold.iter().zip(pred).enumerate() {
        if g.uid() != p.uid() {
            return Err(DraftError::UidMismatch {
                index,
                gold: g.uid().clone(),
                pred: p.uid().clone(),
            });
        }
    }
    Ok(())
}

fn score_pair(gold: &Instance, pred: &Instance) -> Result<InstanceScore> {
    let season = gold
        .next_season
        .as_ref()
        .ok_or_else(|| DraftError::missing("next season"))?;
    let roster = pred
        .output
        .as_ref()
        .ok_or_else(|| DraftError::missing("output"))?;

    let breakdown = score_breakdown(roster, season)?;
    let score: f64 = breakdown.values().sum();
    debug!(uid = %gold.uid(), score, ?breakdown, "scored instance");
    Ok(InstanceScore {
        uid: gold.uid().clone(),
        score,
    })
}

/// Score every predicted roster against its gold next season.
///
/// Pairing is validated for all instances before anything is scored.
/// Instances are then scored in parallel; the result keeps input order.
pub fn score_predictions(gold: &[Instance], pred: &[Instance]) -> Result<PredictionScores> {
    check_pairing(gold, pred)?;

    let scores = gold
        .par_iter()
        .zip(pred.par_iter())
        .map(|(g, p)| score_pair(g, p))
        .collect::<Result<Vec<_>>>()?;

    let combined = if scores.is_empty() {
        0.0
    } else {
        scores.iter().map(|s| s.score).sum::<f64>() / scores.len() as f64
    };

    Ok(PredictionScores { scores, combined })
}
