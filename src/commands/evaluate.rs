//! Evaluate command implementation

use std::path::Path;

use tracing::info;

use crate::{
    scoring::{score_predictions, PredictionScores},
    storage::read_instances,
    Result,
};

/// Handle the evaluate command
pub fn handle_evaluate(gold: &Path, pred: &Path, as_json: bool) -> Result<PredictionScores> {
    let gold_insts = read_instances(gold)?;
    let pred_insts = read_instances(pred)?;
    info!(
        gold = gold_insts.len(),
        pred = pred_insts.len(),
        "instances loaded"
    );

    let result = score_predictions(&gold_insts, &pred_insts)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for score in &result.scores {
            println!("{}\t{:.2}", score.uid, score.score);
        }
        println!("Combined score: {}", result.combined);
    }

    info!("DONE");
    Ok(result)
}
