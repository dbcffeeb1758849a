use crate::{
    FetchState, HistoryViewController, ResultRow, SearchDraft, SearchFormController, SearchId,
    SubmissionOutcome, Tab,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub tab: Tab,
    pub form: FormView,
    pub history: HistoryView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub draft: SearchDraft,
    /// Submit button is disabled and reads "Submitting...".
    pub submitting: bool,
    pub status: Option<StatusMessage>,
    pub validation_error: Option<String>,
    /// `None` when the last submission attached no result collection.
    pub results: Option<Vec<ResultRowView>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub id: u64,
    pub position: u32,
    pub url: String,
    pub created_at: String,
    /// The URL contains the monitored target.
    pub is_match: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryView {
    pub loading: bool,
    pub error: Option<String>,
    pub rows: Vec<HistoryRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: SearchId,
    pub keyword: String,
    pub target_url: String,
    pub date: String,
    pub expanded: bool,
    /// Only present on the expanded row.
    pub results: Option<ExpandedResults>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandedResults {
    Loading,
    Loaded(Vec<ResultRowView>),
    Failed(String),
}

pub(crate) fn form_view(form: &SearchFormController) -> FormView {
    let target = form.submitted_target().unwrap_or_default();
    let (status, results) = match form.outcome() {
        SubmissionOutcome::Idle | SubmissionOutcome::Pending => (None, None),
        SubmissionOutcome::Succeeded { message, results } => (
            Some(StatusMessage::Success(message.clone())),
            results.as_deref().map(|rows| row_views(rows, target)),
        ),
        SubmissionOutcome::Failed { message } => {
            (Some(StatusMessage::Error(message.clone())), None)
        }
    };

    FormView {
        draft: form.draft().clone(),
        submitting: form.outcome().is_pending(),
        status,
        validation_error: form.validation_error().map(ToString::to_string),
        results,
    }
}

pub(crate) fn history_view(history: &HistoryViewController) -> HistoryView {
    let rows = history
        .items()
        .iter()
        .map(|item| {
            let expanded = history.expanded() == Some(item.id);
            let results = expanded.then(|| match history.cache().get(item.id) {
                Some(FetchState::Loaded(rows)) => {
                    ExpandedResults::Loaded(row_views(rows, &item.target_url))
                }
                Some(FetchState::Failed(failure)) => ExpandedResults::Failed(failure.to_string()),
                Some(FetchState::Loading) | None => ExpandedResults::Loading,
            });
            HistoryRowView {
                id: item.id,
                keyword: item.keyword.clone(),
                target_url: item.target_url.clone(),
                date: item.date.clone(),
                expanded,
                results,
            }
        })
        .collect();

    HistoryView {
        loading: history.is_loading(),
        error: history.load_error().map(ToString::to_string),
        rows,
    }
}

fn row_views(rows: &[ResultRow], target_url: &str) -> Vec<ResultRowView> {
    rows.iter()
        .map(|row| ResultRowView {
            id: row.id,
            position: row.position,
            url: row.url.clone(),
            created_at: row.created_at.clone(),
            is_match: row.matches_target(target_url),
        })
        .collect()
}
