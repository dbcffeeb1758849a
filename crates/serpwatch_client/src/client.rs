use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serpwatch_core::{HistoryItem, ResultRow, SearchDraft, SearchId, SubmitReply};
use serpwatch_logging::{watch_debug, watch_warn};

use crate::wire::{self, SearchRequestBody, WireHistoryItem, WireResultRow};
use crate::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://localhost:7282";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Scheme and authority of the search service, e.g. `https://localhost:7282`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The three operations of the search service.
///
/// Implementations only map requests and responses; they never touch
/// controller state.
#[async_trait::async_trait]
pub trait RemoteSearchClient: Send + Sync {
    /// Never fails: transport and service errors come back as
    /// [`SubmitReply::Rejected`].
    async fn submit(&self, draft: &SearchDraft) -> SubmitReply;

    async fn list_history(&self) -> Result<Vec<HistoryItem>, ClientError>;

    async fn fetch_results(&self, search_id: SearchId) -> Result<Vec<ResultRow>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpSearchClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|_| ClientError::InvalidBaseUrl(settings.base_url.clone()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(settings.base_url));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;

        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path);
        watch_debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| ClientError::Transport(transport_message(&err)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::Transport(transport_message(&err)))?;

        if !status.is_success() {
            return Err(ClientError::Service {
                status: status.as_u16(),
                message: wire::error_message(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|err| ClientError::Malformed(err.to_string()))
    }
}

#[async_trait::async_trait]
impl RemoteSearchClient for HttpSearchClient {
    async fn submit(&self, draft: &SearchDraft) -> SubmitReply {
        let url = self.endpoint("search");
        let payload = match serde_json::to_vec(&SearchRequestBody::from(draft)) {
            Ok(payload) => payload,
            Err(err) => {
                return SubmitReply::Rejected {
                    message: err.to_string(),
                }
            }
        };
        watch_debug!(
            "POST {} keyword_len={} top_n={}",
            url,
            draft.keyword.len(),
            draft.top_n
        );

        let response = match self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                let message = transport_message(&err);
                watch_warn!("Submit failed before a response: {}", message);
                return SubmitReply::Rejected { message };
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if status.is_success() => {
                watch_warn!("Submit accepted but body unreadable: {}", err);
                return SubmitReply::AcceptedUnreadable;
            }
            Err(err) => {
                watch_warn!("Submit rejected with unreadable body: {}", err);
                String::new()
            }
        };

        if status.is_success() {
            wire::parse_submit_body(&body)
        } else {
            let message = wire::error_message(status, &body);
            watch_warn!("Submit rejected status={} message={}", status.as_u16(), message);
            SubmitReply::Rejected { message }
        }
    }

    async fn list_history(&self) -> Result<Vec<HistoryItem>, ClientError> {
        let items: Vec<WireHistoryItem> = self.get_json("search/history").await?;
        Ok(items.into_iter().map(HistoryItem::from).collect())
    }

    async fn fetch_results(&self, search_id: SearchId) -> Result<Vec<ResultRow>, ClientError> {
        let rows: Vec<WireResultRow> = self
            .get_json(&format!("search/results/{search_id}"))
            .await?;
        Ok(rows.into_iter().map(ResultRow::from).collect())
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "request timed out".to_string();
    }
    if err.is_connect() {
        return "could not connect to the search service".to_string();
    }
    err.to_string()
}
