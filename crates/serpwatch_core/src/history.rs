use crate::{
    Effect, FetchState, HistoryItem, LoadFailure, RequestId, ResultCache, ResultRow, SearchId,
};

/// Owns the history list, the single expanded item and the result cache.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryViewController {
    items: Vec<HistoryItem>,
    expanded: Option<SearchId>,
    cache: ResultCache,
    load_error: Option<LoadFailure>,
    loading: bool,
    last_request_id: RequestId,
}

impl HistoryViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn expanded(&self) -> Option<SearchId> {
        self.expanded
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn load_error(&self) -> Option<&LoadFailure> {
        self.load_error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Entering the view always refetches the list.
    pub fn activate(&mut self) -> Effect {
        self.last_request_id += 1;
        self.loading = true;
        Effect::LoadHistory {
            request_id: self.last_request_id,
        }
    }

    /// Applies a history response. Only the latest request counts; a failure
    /// keeps whatever list was shown before.
    pub fn history_settled(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<HistoryItem>, LoadFailure>,
    ) -> bool {
        if request_id != self.last_request_id {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.load_error = None;
            }
            Err(failure) => self.load_error = Some(failure),
        }
        true
    }

    /// Expands `id`, or collapses it if it is the expanded item.
    ///
    /// The in-flight marker is set here, before the fetch effect leaves, so a
    /// second toggle of the same id can never start a duplicate request.
    pub fn toggle(&mut self, id: SearchId) -> Option<Effect> {
        if self.expanded == Some(id) {
            self.expanded = None;
            return None;
        }
        self.expanded = Some(id);
        if self.cache.begin_fetch(id) {
            Some(Effect::LoadResults { search_id: id })
        } else {
            None
        }
    }

    /// Stores a results response whatever is expanded now.
    pub fn results_settled(&mut self, id: SearchId, result: Result<Vec<ResultRow>, LoadFailure>) {
        match result {
            Ok(rows) => self.cache.complete(id, rows),
            Err(failure) => self.cache.fail(id, failure),
        }
    }

    /// Cache state of the expanded item, read at render time.
    pub fn expanded_state(&self) -> Option<(SearchId, Option<&FetchState>)> {
        self.expanded.map(|id| (id, self.cache.get(id)))
    }
}
