use std::collections::BTreeMap;

use crate::{LoadFailure, ResultRow, SearchId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// A fetch is outstanding; nobody else may start one.
    Loading,
    Loaded(Vec<ResultRow>),
    /// Last attempt failed. Kept for display only; the next expansion retries.
    Failed(LoadFailure),
}

/// Result sets of historical searches, memoized for the whole session.
///
/// Loaded entries are never evicted: a past search's results do not change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultCache {
    entries: BTreeMap<SearchId, FetchState>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SearchId) -> Option<&FetchState> {
        self.entries.get(&id)
    }

    pub fn rows(&self, id: SearchId) -> Option<&[ResultRow]> {
        match self.entries.get(&id) {
            Some(FetchState::Loaded(rows)) => Some(rows),
            _ => None,
        }
    }

    pub fn is_in_flight(&self, id: SearchId) -> bool {
        matches!(self.entries.get(&id), Some(FetchState::Loading))
    }

    /// Marks `id` as in flight. Returns `false` when a fetch is already
    /// outstanding or the rows are already known, in which case the caller
    /// must not fetch.
    pub fn begin_fetch(&mut self, id: SearchId) -> bool {
        match self.entries.get(&id) {
            Some(FetchState::Loading | FetchState::Loaded(_)) => false,
            None | Some(FetchState::Failed(_)) => {
                self.entries.insert(id, FetchState::Loading);
                true
            }
        }
    }

    pub fn complete(&mut self, id: SearchId, rows: Vec<ResultRow>) {
        self.entries.insert(id, FetchState::Loaded(rows));
    }

    /// Clears the in-flight marker without storing rows. A result that
    /// already arrived is kept.
    pub fn fail(&mut self, id: SearchId, failure: LoadFailure) {
        if matches!(self.entries.get(&id), Some(FetchState::Loaded(_))) {
            return;
        }
        self.entries.insert(id, FetchState::Failed(failure));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
