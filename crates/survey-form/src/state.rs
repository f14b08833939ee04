use std::sync::Arc;

use tokio::task::JoinHandle;

use survey_core::{
    ErrorMap, FieldError, FieldPath, FormSnapshot, SummaryPayload, build_summary, questions_for,
    validate,
};
use survey_store::{PersistenceGateway, submission_key};

/// State container for one survey form session.
///
/// Holds the current snapshot, the validation error set, and the two derived
/// display flags. Field-change and submit events are handled synchronously to
/// completion; the persistence write is the only operation that completes
/// asynchronously, and nothing observed by validation or display depends on
/// its outcome.
pub struct FormState {
    snapshot: FormSnapshot,
    errors: ErrorMap,
    additional_questions: Vec<String>,
    show_summary: bool,
    gateway: Arc<dyn PersistenceGateway>,
}

/// Result of one submit event.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; the error map carries the details and nothing was
    /// persisted or displayed.
    Rejected,
    /// The submission was accepted and a write dispatched under `key`.
    /// `write` completes when the store call does; the form never waits on it.
    Accepted { key: String, write: JoinHandle<()> },
}

impl FormState {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            snapshot: FormSnapshot::default(),
            errors: ErrorMap::new(),
            additional_questions: Vec::new(),
            show_summary: false,
            gateway,
        }
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn additional_questions(&self) -> &[String] {
        &self.additional_questions
    }

    pub fn show_summary(&self) -> bool {
        self.show_summary
    }

    /// Handles one field-change event from the UI surface.
    ///
    /// Replaces exactly the addressed leaf, then clears the whole error map
    /// regardless of which field changed. A path or topic that fails to parse
    /// leaves the state untouched, errors included.
    pub fn apply_field_change(&mut self, path: &str, value: &str) -> Result<(), FieldError> {
        let path: FieldPath = path.parse()?;
        self.snapshot.set(&path, value)?;
        self.errors.clear();
        Ok(())
    }

    /// Handles the submit event: validate, then commit.
    ///
    /// On validation failure the computed map becomes the current error state
    /// and nothing else happens. On success the additional questions are
    /// derived, the write is dispatched fire-and-forget, and the summary flag
    /// is raised; the write outcome is only ever logged. There is no reset
    /// path afterwards: the form stays editable and the summary stays visible.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate(&self.snapshot);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }
        self.errors = errors;

        self.additional_questions = questions_for(self.snapshot.survey_topic)
            .iter()
            .map(|question| question.to_string())
            .collect();

        let key = submission_key();
        let write = dispatch_write(
            Arc::clone(&self.gateway),
            key.clone(),
            self.snapshot.clone(),
        );

        self.show_summary = true;
        SubmitOutcome::Accepted { key, write }
    }

    /// Presentation payload for the current state.
    pub fn summary(&self) -> SummaryPayload {
        build_summary(&self.snapshot, &self.additional_questions)
    }
}

/// Spawns the store write; completion is reported to the log and nowhere else.
fn dispatch_write(
    gateway: Arc<dyn PersistenceGateway>,
    key: String,
    snapshot: FormSnapshot,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match gateway.put(&key, &snapshot).await {
            Ok(()) => tracing::info!(%key, "survey submission persisted"),
            Err(error) => tracing::warn!(%key, %error, "survey submission write failed"),
        }
    })
}
