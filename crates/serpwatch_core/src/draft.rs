use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_ENGINE_ID: u32 = 1;
pub const DEFAULT_TOP_N: u32 = 100;
pub const MAX_TOP_N: u32 = 1000;

/// The search request being composed in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDraft {
    pub engine_id: u32,
    pub target_url: String,
    pub keyword: String,
    pub top_n: u32,
}

impl Default for SearchDraft {
    fn default() -> Self {
        Self {
            engine_id: DEFAULT_ENGINE_ID,
            target_url: String::new(),
            keyword: String::new(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl SearchDraft {
    /// Checks the constraints the input boundary enforces before anything is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.engine_id < 1 {
            return Err(ValidationError::EngineIdOutOfRange(self.engine_id));
        }
        if self.target_url.is_empty() {
            return Err(ValidationError::Required(DraftField::TargetUrl));
        }
        if url::Url::parse(&self.target_url).is_err() {
            return Err(ValidationError::InvalidUrl(self.target_url.clone()));
        }
        if self.keyword.is_empty() {
            return Err(ValidationError::Required(DraftField::Keyword));
        }
        if !(1..=MAX_TOP_N).contains(&self.top_n) {
            return Err(ValidationError::TopNOutOfRange(self.top_n));
        }
        Ok(())
    }

    pub(crate) fn apply(&mut self, field: DraftField, raw: &str) -> Result<(), ValidationError> {
        let value = raw.trim();
        match field {
            DraftField::EngineId => self.engine_id = parse_integer(field, value)?,
            DraftField::TopN => self.top_n = parse_integer(field, value)?,
            DraftField::TargetUrl => self.target_url = value.to_string(),
            DraftField::Keyword => self.keyword = value.to_string(),
        }
        Ok(())
    }
}

fn parse_integer(field: DraftField, value: &str) -> Result<u32, ValidationError> {
    value.parse().map_err(|_| ValidationError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    EngineId,
    TargetUrl,
    Keyword,
    TopN,
}

impl DraftField {
    /// Name of the field in the request body.
    pub fn wire_name(self) -> &'static str {
        match self {
            DraftField::EngineId => "searchEngineId",
            DraftField::TargetUrl => "targetUrl",
            DraftField::Keyword => "keyword",
            DraftField::TopN => "topNResult",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for DraftField {
    type Err = ValidationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "searchEngineId" | "engineId" | "engine" => Ok(DraftField::EngineId),
            "targetUrl" | "url" => Ok(DraftField::TargetUrl),
            "keyword" => Ok(DraftField::Keyword),
            "topNResult" | "topN" => Ok(DraftField::TopN),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

/// Input rejected at the form boundary. Never reaches the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown field {0:?}")]
    UnknownField(String),
    #[error("{field} must be a whole number, got {value:?}")]
    NotAnInteger { field: DraftField, value: String },
    #[error("{0} is required")]
    Required(DraftField),
    #[error("{0:?} is not a valid URL")]
    InvalidUrl(String),
    #[error("search engine id must be at least 1, got {0}")]
    EngineIdOutOfRange(u32),
    #[error("top N must be between 1 and 1000, got {0}")]
    TopNOutOfRange(u32),
}
