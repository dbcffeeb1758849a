use crate::view_model::{self, AppViewModel};
use crate::{HistoryViewController, SearchFormController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    SearchForm,
    History,
}

/// Both controllers plus the selected tab. The controllers share no fields
/// and only meet in the view model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    tab: Tab,
    form: SearchFormController,
    history: HistoryViewController,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn form(&self) -> &SearchFormController {
        &self.form
    }

    pub fn history(&self) -> &HistoryViewController {
        &self.history
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            tab: self.tab,
            form: view_model::form_view(&self.form),
            history: view_model::history_view(&self.history),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub(crate) fn form_mut(&mut self) -> &mut SearchFormController {
        &mut self.form
    }

    pub(crate) fn history_mut(&mut self) -> &mut HistoryViewController {
        &mut self.history
    }
}
