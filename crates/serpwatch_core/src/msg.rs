use crate::{DraftField, HistoryItem, LoadFailure, RequestId, ResultRow, SearchId, SubmitReply, Tab};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched between the form and the history view.
    TabSelected(Tab),
    /// User edited one form input (raw text as typed).
    FieldEdited { field: DraftField, raw: String },
    /// User pressed the submit button.
    SubmitClicked,
    /// The service answered a submission.
    SubmitSettled {
        request_id: RequestId,
        reply: SubmitReply,
    },
    /// The history list request finished.
    HistorySettled {
        request_id: RequestId,
        result: Result<Vec<HistoryItem>, LoadFailure>,
    },
    /// User clicked a history entry header.
    HistoryItemToggled(SearchId),
    /// A per-search results request finished.
    ResultsSettled {
        search_id: SearchId,
        result: Result<Vec<ResultRow>, LoadFailure>,
    },
    /// User asked to see the current screen again.
    RedrawRequested,
}
