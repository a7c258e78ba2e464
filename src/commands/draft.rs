//! Draft command implementations (dynamic snake draft and static one-shot)

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    cli::types::ModelKind,
    draft::{build_strategy, DraftMode, SnakeDraft},
    error::DraftError,
    storage::{open_instances, InstanceWriter},
    Result,
};

use super::resolve_seed;

/// Parameters for the draft commands
#[derive(Debug, Clone)]
pub struct DraftParams {
    pub input: PathBuf,
    pub out: PathBuf,
    pub seed: Option<u64>,
    /// Models in first-round pick order
    pub models: Vec<ModelKind>,
    pub mode: DraftMode,
}

/// What a finished draft wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSummary {
    pub instances: usize,
    /// One file per strategy, in pick order.
    pub outputs: Vec<PathBuf>,
}

/// Handle the `draft` and `static-draft` commands
pub fn handle_draft(params: DraftParams) -> Result<DraftSummary> {
    if params.models.is_empty() {
        return Err(DraftError::NoModels);
    }
    let seed = resolve_seed(params.seed)?;

    let strategies = params
        .models
        .iter()
        .enumerate()
        .map(|(i, kind)| build_strategy(*kind, params.mode, i + 1, seed))
        .collect();

    // a static draft writes the whole input line back, a snake draft only `input`
    let draft = match params.mode {
        DraftMode::Static => SnakeDraft::new(strategies).keeping_full_record(),
        DraftMode::Dynamic => SnakeDraft::new(strategies),
    };
    let summary = run_draft(draft, &params.input, &params.out)?;
    info!("DONE");
    Ok(summary)
}

/// Draft every instance of `input` and write one JSON-lines file per strategy
/// into `out_dir`.
///
/// Output is staged in `.partial` files and only renamed into place once
/// every instance has been drafted, so a failed run leaves no results behind.
pub fn run_draft(mut draft: SnakeDraft, input: &Path, out_dir: &Path) -> Result<DraftSummary> {
    let outputs: Vec<PathBuf> = draft
        .names()
        .iter()
        .map(|name| out_dir.join(format!("{name}.jsonl")))
        .collect();
    let staged: Vec<PathBuf> = outputs
        .iter()
        .map(|path| path.with_extension("jsonl.partial"))
        .collect();

    let instances = match draft_into(&mut draft, input, &staged) {
        Ok(count) => count,
        Err(e) => {
            for path in &staged {
                if path.exists() && fs::remove_file(path).is_err() {
                    warn!("could not remove {}", path.display());
                }
            }
            return Err(e);
        }
    };

    for (from, to) in staged.iter().zip(&outputs) {
        fs::rename(from, to)?;
        info!("writing to {}", to.display());
    }

    Ok(DraftSummary { instances, outputs })
}

fn draft_into(draft: &mut SnakeDraft, input: &Path, staged: &[PathBuf]) -> Result<usize> {
    let mut writers = staged
        .iter()
        .map(|path| InstanceWriter::create(path))
        .collect::<Result<Vec<_>>>()?;

    let mut count = 0;
    for instance in open_instances(input)? {
        let instance = instance?;
        for (writer, drafted) in writers.iter_mut().zip(draft.draft_instance(&instance)?) {
            writer.write(&drafted.instance)?;
        }
        count += 1;
    }

    for (writer, path) in writers.into_iter().zip(staged) {
        debug!(lines = writer.written(), "staged {}", path.display());
        writer.finish()?;
    }
    info!(instances = count, "drafted");
    Ok(count)
}
