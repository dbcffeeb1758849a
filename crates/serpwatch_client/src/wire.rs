//! JSON shapes exchanged with the search service and their mapping to core types.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serpwatch_core::{HistoryItem, ResultRow, SearchDraft, SubmitReply};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchRequestBody<'a> {
    search_engine_id: u32,
    target_url: &'a str,
    keyword: &'a str,
    top_n_result: u32,
}

impl<'a> From<&'a SearchDraft> for SearchRequestBody<'a> {
    fn from(draft: &'a SearchDraft) -> Self {
        Self {
            search_engine_id: draft.engine_id,
            target_url: &draft.target_url,
            keyword: &draft.keyword,
            top_n_result: draft.top_n,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireResultRow {
    id: u64,
    position: u32,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<WireResultRow> for ResultRow {
    fn from(row: WireResultRow) -> Self {
        Self {
            id: row.id,
            position: row.position,
            url: row.url.unwrap_or_default(),
            created_at: row.created_at.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireHistoryItem {
    id: u64,
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    target_url: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

impl From<WireHistoryItem> for HistoryItem {
    fn from(item: WireHistoryItem) -> Self {
        Self {
            id: item.id,
            keyword: item.keyword.unwrap_or_default(),
            target_url: item.target_url.unwrap_or_default(),
            date: item.date.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireSubmitResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    results: Option<Vec<WireResultRow>>,
}

/// Interprets the body of a 2xx submit response.
pub(crate) fn parse_submit_body(body: &str) -> SubmitReply {
    if body.trim().is_empty() {
        return SubmitReply::AcceptedEmpty;
    }
    match serde_json::from_str::<WireSubmitResponse>(body) {
        Ok(response) => SubmitReply::Accepted {
            message: response.message,
            results: response
                .results
                .map(|rows| rows.into_iter().map(ResultRow::from).collect()),
        },
        Err(_) => SubmitReply::AcceptedUnreadable,
    }
}

/// Picks the human-readable reason out of a non-2xx response.
///
/// JSON bodies: `error`, then `title`, then `detail`, then the reason phrase.
/// Other bodies: the raw text, then the reason phrase.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let reason = status.canonical_reason().unwrap_or_default();
    let message = match serde_json::from_str::<Value>(body) {
        Ok(json) => ["error", "title", "detail"]
            .iter()
            .find_map(|key| {
                json.get(key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| reason.to_string()),
        Err(_) if !body.is_empty() => body.to_string(),
        Err(_) => reason.to_string(),
    };
    if message.is_empty() {
        format!("Request failed with status {}", status.as_u16())
    } else {
        message
    }
}
