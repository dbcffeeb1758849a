use crate::{AppState, Effect, Msg, Tab};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TabSelected(tab) => {
            if tab == state.tab() {
                return (state, Vec::new());
            }
            state.set_tab(tab);
            state.mark_dirty();
            match tab {
                Tab::History => vec![state.history_mut().activate()],
                Tab::SearchForm => Vec::new(),
            }
        }
        Msg::FieldEdited { field, raw } => {
            // A rejected value is kept on the controller for display.
            let _ = state.form_mut().update_field(field, &raw);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => match state.form_mut().submit() {
            Ok(Some(effect)) => {
                state.mark_dirty();
                vec![effect]
            }
            // Already pending: nothing changes, nothing is sent.
            Ok(None) => Vec::new(),
            Err(_) => {
                state.mark_dirty();
                Vec::new()
            }
        },
        Msg::SubmitSettled { request_id, reply } => {
            if state.form_mut().settle(request_id, reply) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HistorySettled { request_id, result } => {
            if state.history_mut().history_settled(request_id, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HistoryItemToggled(search_id) => {
            state.mark_dirty();
            state.history_mut().toggle(search_id).into_iter().collect()
        }
        Msg::ResultsSettled { search_id, result } => {
            state.history_mut().results_settled(search_id, result);
            if state.history().expanded() == Some(search_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::RedrawRequested => {
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}
