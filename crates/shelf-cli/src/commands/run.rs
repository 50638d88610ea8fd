//! `shelf run`: execute a scenario and print its report.

use serde::Serialize;
use tracing::{info, instrument};

use shelf_adapters::{JournalEntry, MemoryJournal, TracingJournal};
use shelf_core::application::{
    ports::LoanJournal,
    report::{Admission, InventoryLine, ScenarioReport, StepOutcome},
};

use crate::{
    cli::{OutputFormat, ReportFormat, RunArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON document printed by `--format json`.
#[derive(Serialize)]
struct RunDocument<'a> {
    scenario: String,
    #[serde(flatten)]
    report: &'a ScenarioReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    journal: Option<Vec<JournalEntry>>,
}

#[instrument(skip_all, fields(scenario = %args.scenario.display()))]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::scenario_service(&args.scenario, &config)?;

    let memory = MemoryJournal::new();
    let journal: Box<dyn LoanJournal> = if args.journal {
        Box::new(memory.clone())
    } else {
        Box::new(TracingJournal::new())
    };

    let run = service.run(journal)?;
    let report = run.report();
    info!(
        steps = report.steps.len(),
        rejected = report.rejected().count(),
        "Scenario finished"
    );

    let entries = if args.journal {
        Some(memory.entries()?)
    } else {
        None
    };

    if args.format == ReportFormat::Json || output.format() == OutputFormat::Json {
        return output.json(&RunDocument {
            scenario: args.scenario.display().to_string(),
            report,
            journal: entries,
        });
    }

    render_table(report, &output)?;

    if let Some(entries) = entries {
        output.header("\nJournal")?;
        for entry in &entries {
            output.data(&journal_line(entry))?;
        }
    }

    Ok(())
}

fn render_table(report: &ScenarioReport, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Library ({})", report.limits))?;

    output.header("\nAdmissions")?;
    for admission in &report.admissions {
        let line = admission_line(admission);
        if admission.id.is_some() {
            output.success(&line)?;
        } else {
            output.failure(&line)?;
        }
    }

    output.header("\nSteps")?;
    for (n, step) in report.steps.iter().enumerate() {
        let line = format!("{:>3}. {step}", n + 1);
        match step {
            StepOutcome::Refused { .. } | StepOutcome::ReturnFailed { .. } => {
                output.failure(&line)?
            }
            _ => output.success(&line)?,
        }
    }

    output.header("\nInventory")?;
    if report.inventory.is_empty() {
        output.data("  (catalog is empty)")?;
    }
    for line in &report.inventory {
        output.data(&inventory_line(line))?;
    }

    Ok(())
}

fn admission_line(admission: &Admission) -> String {
    match (admission.id, &admission.rejected) {
        (Some(id), _) => format!("{} '{}' is #{id}", admission.kind, admission.key),
        (None, Some(reason)) => format!("{} '{}' rejected: {reason}", admission.kind, admission.key),
        (None, None) => format!("{} '{}' rejected", admission.kind, admission.key),
    }
}

fn inventory_line(line: &InventoryLine) -> String {
    let state = match &line.borrower {
        Some(patron) => format!("on loan to {patron}"),
        None => "available".to_string(),
    };
    format!("  #{:<3} {:<12} {:<30} {state}", line.id, line.key, line.title)
}

fn journal_line(entry: &JournalEntry) -> String {
    serde_json::to_string(entry).unwrap_or_else(|_| format!("{:?}", entry.event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::application::report::EntityKind;

    #[test]
    fn admission_lines() {
        let admitted = Admission {
            kind: EntityKind::Book,
            key: "dune".into(),
            id: Some(0),
            rejected: None,
        };
        assert_eq!(admission_line(&admitted), "book 'dune' is #0");

        let rejected = Admission {
            kind: EntityKind::Patron,
            key: "bob".into(),
            id: None,
            rejected: Some("full".into()),
        };
        assert_eq!(admission_line(&rejected), "patron 'bob' rejected: full");
    }

    #[test]
    fn inventory_line_shows_borrower() {
        let line = InventoryLine {
            id: 1,
            key: "dune".into(),
            title: "Dune".into(),
            borrower: Some("ada".into()),
        };
        let text = inventory_line(&line);
        assert!(text.starts_with("  #1"));
        assert!(text.ends_with("on loan to ada"));
    }
}
