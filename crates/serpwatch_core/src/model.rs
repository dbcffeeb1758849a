use std::fmt;

/// Identifier the service assigns to a submitted search.
pub type SearchId = u64;

/// One ranked URL belonging to a search's result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub id: u64,
    /// 1-based rank as reported by the service.
    pub position: u32,
    pub url: String,
    /// ISO-8601 timestamp as sent by the service; may be empty.
    pub created_at: String,
}

impl ResultRow {
    /// Whether this row points at the monitored site.
    ///
    /// An empty target never matches.
    pub fn matches_target(&self, target_url: &str) -> bool {
        !target_url.is_empty() && self.url.contains(target_url)
    }
}

/// A previously submitted search, as listed by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub id: SearchId,
    pub keyword: String,
    pub target_url: String,
    /// ISO-8601 timestamp as sent by the service; may be empty.
    pub date: String,
}

/// What the remote service made of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReply {
    /// 2xx with a readable JSON body.
    Accepted {
        message: Option<String>,
        results: Option<Vec<ResultRow>>,
    },
    /// 2xx with an empty body.
    AcceptedEmpty,
    /// 2xx whose body could not be read. The search most likely exists anyway.
    AcceptedUnreadable,
    /// Non-2xx response or transport failure, with a human-readable reason.
    Rejected { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailureKind {
    /// The service could not be reached.
    Transport,
    /// The service answered with a non-success status.
    Service { status: u16 },
    /// The service answered 2xx with a body that did not decode.
    Malformed,
}

/// Why a history or results fetch did not produce data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: LoadFailureKind,
    pub message: String,
}

impl LoadFailure {
    pub fn new(kind: LoadFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LoadFailureKind::Transport => write!(f, "network error: {}", self.message),
            LoadFailureKind::Service { status } => {
                write!(f, "service error {status}: {}", self.message)
            }
            LoadFailureKind::Malformed => write!(f, "unreadable response: {}", self.message),
        }
    }
}
