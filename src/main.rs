//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use draft_eval::{
    cli::{Commands, DraftEval},
    commands::{
        draft::{handle_draft, DraftParams},
        evaluate::handle_evaluate,
    },
    draft::DraftMode,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = DraftEval::parse();
    init_tracing(app.debug)?;

    match app.command {
        Commands::Draft { io, models } => {
            handle_draft(DraftParams {
                input: io.input,
                out: io.out,
                seed: io.seed,
                models,
                mode: DraftMode::Dynamic,
            })
            .context("snake draft failed")?;
        }

        Commands::StaticDraft { io, model } => {
            handle_draft(DraftParams {
                input: io.input,
                out: io.out,
                seed: io.seed,
                models: vec![model],
                mode: DraftMode::Static,
            })
            .context("static draft failed")?;
        }

        Commands::Evaluate { gold, pred, json } => {
            handle_evaluate(&gold, &pred, json).with_context(|| {
                format!(
                    "failed to score {} against {}",
                    pred.display(),
                    gold.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Log to stderr; stdout carries command results.
fn init_tracing(debug: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if debug {
        "draft_eval=debug,warn"
    } else {
        "draft_eval=info,warn"
    };

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
