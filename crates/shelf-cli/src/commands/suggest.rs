//! `shelf suggest`: run a scenario, then suggest a book for one patron.

use serde::Serialize;
use tracing::{debug, instrument};

use shelf_adapters::TracingJournal;

use crate::{
    cli::{OutputFormat, SuggestArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Suggestion {
    patron: String,
    book: Option<String>,
    title: Option<String>,
    score: Option<u64>,
}

#[instrument(skip_all, fields(patron = %args.patron))]
pub fn execute(args: SuggestArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::scenario_service(&args.scenario, &config)?;
    let run = service.run(Box::new(TracingJournal::new()))?;

    let found = run.suggest_for(&args.patron)?;
    debug!(found = found.is_some(), "Suggestion ready");

    let score = match (&found, run.patron(&args.patron)) {
        (Some((_, book)), Some(patron)) => Some(patron.book_score(book)),
        _ => None,
    };

    let suggestion = Suggestion {
        patron: args.patron.clone(),
        book: found.as_ref().map(|(key, _)| key.clone()),
        title: found.as_ref().map(|(_, book)| book.title().to_string()),
        score,
    };

    if output.format() == OutputFormat::Json {
        return output.json(&suggestion);
    }

    match &found {
        Some((key, book)) => output.success(&format!(
            "Suggest '{key}' to {}: {book}",
            args.patron
        ))?,
        None => output.info(&format!("Nothing to suggest to {}", args.patron))?,
    }
    output.data(suggestion.book.as_deref().unwrap_or("-"))?;

    Ok(())
}
