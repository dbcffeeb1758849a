use crate::{SearchDraft, SearchId};

/// Correlates a remote call with the message that settles it.
pub type RequestId = u64;

/// Remote work the host must perform on behalf of the core.
///
/// Every effect is answered by exactly one settlement message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Answered by `Msg::SubmitSettled`.
    SubmitSearch {
        request_id: RequestId,
        draft: SearchDraft,
    },
    /// Answered by `Msg::HistorySettled`.
    LoadHistory { request_id: RequestId },
    /// Answered by `Msg::ResultsSettled`.
    LoadResults { search_id: SearchId },
}
