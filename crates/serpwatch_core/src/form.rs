use crate::{DraftField, Effect, RequestId, ResultRow, SearchDraft, SubmitReply, ValidationError};

pub const MSG_ADDED: &str = "Search added successfully!";
pub const MSG_ADDED_NO_DATA: &str = "Search added successfully, but no result data was returned.";
pub const MSG_ADDED_UNREADABLE: &str =
    "Search may have been added, but the response could not be processed.";

/// State of the most recent submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Pending,
    Succeeded {
        message: String,
        results: Option<Vec<ResultRow>>,
    },
    Failed {
        message: String,
    },
}

impl SubmissionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionOutcome::Pending)
    }
}

/// Owns the draft, its validation and the submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFormController {
    draft: SearchDraft,
    outcome: SubmissionOutcome,
    validation_error: Option<ValidationError>,
    pending: Option<Pending>,
    last_request_id: RequestId,
    /// Target URL of the submission behind the current outcome.
    submitted_target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    request_id: RequestId,
    target_url: String,
}

impl SearchFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &SearchDraft {
        &self.draft
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    pub fn submitted_target(&self) -> Option<&str> {
        self.submitted_target.as_deref()
    }

    /// Stores one edited field. Integers are parsed, text is trimmed; nothing
    /// else is checked until submission. A rejected value leaves the draft as
    /// it was.
    pub fn update_field(&mut self, field: DraftField, raw: &str) -> Result<(), ValidationError> {
        let result = self.draft.apply(field, raw);
        self.validation_error = result.as_ref().err().cloned();
        result
    }

    /// Starts a submission of the current draft.
    ///
    /// Returns `Ok(None)` while another submission is pending. An invalid
    /// draft is rejected before anything is sent and the outcome is left alone.
    pub fn submit(&mut self) -> Result<Option<Effect>, ValidationError> {
        if self.outcome.is_pending() {
            return Ok(None);
        }
        if let Err(err) = self.draft.validate() {
            self.validation_error = Some(err.clone());
            return Err(err);
        }

        self.validation_error = None;
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.pending = Some(Pending {
            request_id,
            target_url: self.draft.target_url.clone(),
        });
        self.outcome = SubmissionOutcome::Pending;
        self.submitted_target = None;

        Ok(Some(Effect::SubmitSearch {
            request_id,
            draft: self.draft.clone(),
        }))
    }

    /// Applies the service's answer. Returns `false` if it does not answer
    /// the pending submission and was dropped.
    pub fn settle(&mut self, request_id: RequestId, reply: SubmitReply) -> bool {
        let pending = match self.pending.take() {
            Some(pending) if pending.request_id == request_id => pending,
            other => {
                self.pending = other;
                return false;
            }
        };

        self.outcome = match reply {
            SubmitReply::Accepted { message, results } => SubmissionOutcome::Succeeded {
                message: message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| MSG_ADDED.to_string()),
                results,
            },
            SubmitReply::AcceptedEmpty => SubmissionOutcome::Succeeded {
                message: MSG_ADDED_NO_DATA.to_string(),
                results: None,
            },
            SubmitReply::AcceptedUnreadable => SubmissionOutcome::Succeeded {
                message: MSG_ADDED_UNREADABLE.to_string(),
                results: None,
            },
            SubmitReply::Rejected { message } => SubmissionOutcome::Failed { message },
        };

        if matches!(self.outcome, SubmissionOutcome::Succeeded { .. }) {
            self.draft = SearchDraft::default();
        }
        self.submitted_target = Some(pending.target_url);
        true
    }
}
