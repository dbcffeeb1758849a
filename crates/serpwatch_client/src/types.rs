use serpwatch_core::{
    Effect, HistoryItem, LoadFailure, LoadFailureKind, Msg, RequestId, ResultRow, SearchDraft,
    SearchId, SubmitReply,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),
    #[error("failed to start client runtime: {0}")]
    Runtime(String),
    /// The service could not be reached at all.
    #[error("network error: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("service responded {status}: {message}")]
    Service { status: u16, message: String },
    /// 2xx with a body that does not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<ClientError> for LoadFailure {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Service { status, message } => {
                LoadFailure::new(LoadFailureKind::Service { status }, message)
            }
            ClientError::Malformed(message) => {
                LoadFailure::new(LoadFailureKind::Malformed, message)
            }
            ClientError::Transport(message)
            | ClientError::InvalidBaseUrl(message)
            | ClientError::Runtime(message) => {
                LoadFailure::new(LoadFailureKind::Transport, message)
            }
        }
    }
}

/// Work accepted by [`crate::ClientHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    Submit {
        request_id: RequestId,
        draft: SearchDraft,
    },
    ListHistory {
        request_id: RequestId,
    },
    FetchResults {
        search_id: SearchId,
    },
}

impl From<Effect> for ClientCommand {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::SubmitSearch { request_id, draft } => {
                ClientCommand::Submit { request_id, draft }
            }
            Effect::LoadHistory { request_id } => ClientCommand::ListHistory { request_id },
            Effect::LoadResults { search_id } => ClientCommand::FetchResults { search_id },
        }
    }
}

/// Completion of one [`ClientCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    SubmitCompleted {
        request_id: RequestId,
        reply: SubmitReply,
    },
    HistoryCompleted {
        request_id: RequestId,
        result: Result<Vec<HistoryItem>, ClientError>,
    },
    ResultsCompleted {
        search_id: SearchId,
        result: Result<Vec<ResultRow>, ClientError>,
    },
}

impl From<ClientEvent> for Msg {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::SubmitCompleted { request_id, reply } => {
                Msg::SubmitSettled { request_id, reply }
            }
            ClientEvent::HistoryCompleted { request_id, result } => Msg::HistorySettled {
                request_id,
                result: result.map_err(LoadFailure::from),
            },
            ClientEvent::ResultsCompleted { search_id, result } => Msg::ResultsSettled {
                search_id,
                result: result.map_err(LoadFailure::from),
            },
        }
    }
}
