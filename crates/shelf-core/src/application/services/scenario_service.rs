//! Scenario Service - run a declarative library session.
//!
//! This service coordinates a whole run:
//! 1. Load and validate the scenario from a [`ScenarioSource`]
//! 2. Open a library with the scenario's limits (or the configured defaults)
//! 3. Admit books and patrons in declaration order
//! 4. Execute each step, collecting a [`StepOutcome`]
//! 5. Snapshot the final inventory

use std::collections::HashMap;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError, CirculationService,
        ports::{LoanJournal, ScenarioSource},
        report::{Admission, EntityKind, InventoryLine, ScenarioReport, StepOutcome},
        scenario::{Scenario, Step},
    },
    domain::{Book, BookId, LibraryLimits, Patron, PatronId},
    error::{ShelfError, ShelfResult},
};

/// Loads scenarios and runs them.
pub struct ScenarioService {
    source: Box<dyn ScenarioSource>,
    default_limits: LibraryLimits,
}

impl ScenarioService {
    /// `default_limits` apply when a scenario has no `[library]` table.
    pub fn new(source: Box<dyn ScenarioSource>, default_limits: LibraryLimits) -> Self {
        Self {
            source,
            default_limits,
        }
    }

    /// Load and validate the scenario.
    pub fn load(&self) -> ShelfResult<Scenario> {
        let scenario = self.source.load()?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load the scenario and run it to completion.
    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub fn run(&self, journal: Box<dyn LoanJournal>) -> ShelfResult<ScenarioRun> {
        let scenario = self.load()?;
        ScenarioRun::execute(&scenario, self.default_limits, journal)
    }
}

/// A finished scenario: the report plus the library it left behind.
pub struct ScenarioRun {
    desk: CirculationService,
    books: HashMap<String, Book>,
    patrons: HashMap<String, Patron>,
    book_keys: HashMap<Uuid, String>,
    patron_keys: HashMap<Uuid, String>,
    report: ScenarioReport,
}

impl ScenarioRun {
    /// Run an already-validated scenario.
    pub fn execute(
        scenario: &Scenario,
        default_limits: LibraryLimits,
        journal: Box<dyn LoanJournal>,
    ) -> ShelfResult<Self> {
        let limits = scenario.limits_or(default_limits);
        info!(%limits, steps = scenario.steps.len(), "Running scenario");

        let mut run = Self {
            desk: CirculationService::new(limits, journal),
            books: HashMap::new(),
            patrons: HashMap::new(),
            book_keys: HashMap::new(),
            patron_keys: HashMap::new(),
            report: ScenarioReport {
                limits,
                admissions: Vec::new(),
                steps: Vec::new(),
                inventory: Vec::new(),
            },
        };

        for spec in &scenario.books {
            let book = spec.to_book();
            let admitted = run.desk.add_book(&book).map(BookId::index);
            run.admit(EntityKind::Book, &spec.key, admitted)?;
            run.book_keys.insert(book.handle(), spec.key.clone());
            run.books.insert(spec.key.clone(), book);
        }

        for spec in &scenario.patrons {
            let patron = spec.to_patron();
            let admitted = run.desk.register_patron(&patron).map(PatronId::index);
            run.admit(EntityKind::Patron, &spec.key, admitted)?;
            run.patron_keys.insert(patron.handle(), spec.key.clone());
            run.patrons.insert(spec.key.clone(), patron);
        }

        for step in &scenario.steps {
            let outcome = run.apply(step)?;
            debug!(%outcome, "Step done");
            run.report.steps.push(outcome);
        }

        run.report.inventory = run.inventory();
        Ok(run)
    }

    pub fn report(&self) -> &ScenarioReport {
        &self.report
    }

    pub fn into_report(self) -> ScenarioReport {
        self.report
    }

    pub fn circulation(&self) -> &CirculationService {
        &self.desk
    }

    /// The patron declared under `key`, admitted or not.
    pub fn patron(&self, key: &str) -> Option<&Patron> {
        self.patrons.get(key)
    }

    /// Suggestion for the patron declared under `patron_key`, with the
    /// suggested book's key.
    pub fn suggest_for(&self, patron_key: &str) -> ShelfResult<Option<(String, Book)>> {
        let patron = self
            .patrons
            .get(patron_key)
            .ok_or_else(|| ApplicationError::UnknownKey {
                kind: "patron",
                key: patron_key.to_string(),
            })?;

        let Some(id) = self.desk.library().patron_id(patron) else {
            return Ok(None);
        };

        Ok(self
            .desk
            .suggest(id)?
            .map(|book| (self.key_of_book(&book), book)))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Record an admission. Capacity refusals are part of the report; any
    /// other failure aborts the run.
    fn admit(
        &mut self,
        kind: EntityKind,
        key: &str,
        result: ShelfResult<usize>,
    ) -> ShelfResult<()> {
        let (id, rejected) = match result {
            Ok(id) => (Some(id), None),
            Err(ShelfError::Domain(e)) => (None, Some(e.to_string())),
            Err(other) => return Err(other),
        };
        self.report.admissions.push(Admission {
            kind,
            key: key.to_string(),
            id,
            rejected,
        });
        Ok(())
    }

    fn apply(&mut self, step: &Step) -> ShelfResult<StepOutcome> {
        let outcome = match step {
            Step::Borrow { book, patron } => {
                match (self.catalog_id(book)?, self.registry_id(patron)?) {
                    (Some(book_id), Some(patron_id)) => {
                        match self.desk.borrow(book_id, patron_id) {
                            Ok(()) => StepOutcome::Borrowed {
                                book: book.clone(),
                                patron: patron.clone(),
                            },
                            Err(ShelfError::Domain(e)) => StepOutcome::Refused {
                                book: book.clone(),
                                patron: patron.clone(),
                                reason: e.to_string(),
                            },
                            Err(other) => return Err(other),
                        }
                    }
                    (None, _) => StepOutcome::Refused {
                        book: book.clone(),
                        patron: patron.clone(),
                        reason: format!("book '{book}' is not in the catalog"),
                    },
                    (_, None) => StepOutcome::Refused {
                        book: book.clone(),
                        patron: patron.clone(),
                        reason: format!("patron '{patron}' is not registered"),
                    },
                }
            }
            Step::Return { book } => match self.catalog_id(book)? {
                Some(id) => match self.desk.return_book(id) {
                    Ok(()) => StepOutcome::Returned { book: book.clone() },
                    Err(ShelfError::Domain(e)) => StepOutcome::ReturnFailed {
                        book: book.clone(),
                        reason: e.to_string(),
                    },
                    Err(other) => return Err(other),
                },
                None => StepOutcome::ReturnFailed {
                    book: book.clone(),
                    reason: format!("book '{book}' is not in the catalog"),
                },
            },
            Step::Suggest { patron } => StepOutcome::Suggested {
                patron: patron.clone(),
                book: self.suggest_for(patron)?.map(|(key, _)| key),
            },
            Step::Available { book } => StepOutcome::Availability {
                book: book.clone(),
                available: self
                    .catalog_id(book)?
                    .is_some_and(|id| self.desk.is_available(id)),
            },
        };
        Ok(outcome)
    }

    fn catalog_id(&self, key: &str) -> ShelfResult<Option<BookId>> {
        let book = self.books.get(key).ok_or_else(|| ApplicationError::UnknownKey {
            kind: "book",
            key: key.to_string(),
        })?;
        Ok(self.desk.library().book_id(book))
    }

    fn registry_id(&self, key: &str) -> ShelfResult<Option<PatronId>> {
        let patron = self
            .patrons
            .get(key)
            .ok_or_else(|| ApplicationError::UnknownKey {
                kind: "patron",
                key: key.to_string(),
            })?;
        Ok(self.desk.library().patron_id(patron))
    }

    fn key_of_book(&self, book: &Book) -> String {
        self.book_keys
            .get(&book.handle())
            .cloned()
            .unwrap_or_else(|| book.title().to_string())
    }

    fn inventory(&self) -> Vec<InventoryLine> {
        let library = self.desk.library();
        library
            .books()
            .map(|(id, book)| InventoryLine {
                id: id.index(),
                key: self.key_of_book(book),
                title: book.title().to_string(),
                borrower: book
                    .current_borrower()
                    .and_then(|p| library.patron(p))
                    .and_then(|p| self.patron_keys.get(&p.handle()).cloned()),
            })
            .collect()
    }
}
