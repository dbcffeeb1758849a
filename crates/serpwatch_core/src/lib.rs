//! Serpwatch core: pure state machines for the search form and the history
//! view, the result cache, and view-model projection.
mod cache;
mod draft;
mod effect;
mod form;
mod history;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use cache::{FetchState, ResultCache};
pub use draft::{
    DraftField, SearchDraft, ValidationError, DEFAULT_ENGINE_ID, DEFAULT_TOP_N, MAX_TOP_N,
};
pub use effect::{Effect, RequestId};
pub use form::{
    SearchFormController, SubmissionOutcome, MSG_ADDED, MSG_ADDED_NO_DATA, MSG_ADDED_UNREADABLE,
};
pub use history::HistoryViewController;
pub use model::{HistoryItem, LoadFailure, LoadFailureKind, ResultRow, SearchId, SubmitReply};
pub use msg::Msg;
pub use state::{AppState, Tab};
pub use update::update;
pub use view_model::{
    AppViewModel, ExpandedResults, FormView, HistoryRowView, HistoryView, ResultRowView,
    StatusMessage,
};
