use std::sync::Once;

use pretty_assertions::assert_eq;
use serpwatch_core::{
    update, AppState, Effect, ExpandedResults, FetchState, HistoryItem, HistoryViewController,
    LoadFailure, LoadFailureKind, Msg, ResultRow, Tab,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(serpwatch_logging::initialize_for_tests);
}

fn item(id: u64, keyword: &str) -> HistoryItem {
    HistoryItem {
        id,
        keyword: keyword.to_string(),
        target_url: "https://a.com".to_string(),
        date: "2024-01-01T00:00:00Z".to_string(),
    }
}

fn rows() -> Vec<ResultRow> {
    vec![
        ResultRow {
            id: 11,
            position: 1,
            url: "https://a.com/p".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        },
        ResultRow {
            id: 12,
            position: 2,
            url: "https://b.com/".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        },
    ]
}

fn transport_failure() -> LoadFailure {
    LoadFailure::new(LoadFailureKind::Transport, "connection refused")
}

/// Opens the history tab and answers the list request with `items`.
fn open_history(items: Vec<HistoryItem>) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::TabSelected(Tab::History));
    assert_eq!(effects, vec![Effect::LoadHistory { request_id: 1 }]);
    let (state, effects) = update(
        state,
        Msg::HistorySettled {
            request_id: 1,
            result: Ok(items),
        },
    );
    assert!(effects.is_empty());
    state
}

fn toggle(state: AppState, id: u64) -> (AppState, Vec<Effect>) {
    update(state, Msg::HistoryItemToggled(id))
}

#[test]
fn entering_history_always_refetches() {
    init_logging();
    let state = open_history(vec![item(7, "shoes")]);
    assert_eq!(state.history().items().len(), 1);

    let (state, effects) = update(state, Msg::TabSelected(Tab::SearchForm));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::TabSelected(Tab::History));

    assert_eq!(effects, vec![Effect::LoadHistory { request_id: 2 }]);
    assert!(state.view().history.loading);
    // The previous list stays visible while the refetch runs.
    assert_eq!(state.view().history.rows.len(), 1);
}

#[test]
fn successful_fetch_replaces_the_list() {
    init_logging();
    let state = open_history(vec![item(1, "a"), item(2, "b")]);
    let (state, _) = update(state, Msg::TabSelected(Tab::SearchForm));
    let (state, _) = update(state, Msg::TabSelected(Tab::History));

    let (state, _) = update(
        state,
        Msg::HistorySettled {
            request_id: 2,
            result: Ok(vec![item(3, "c")]),
        },
    );

    let ids: Vec<_> = state.history().items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3]);
    assert!(!state.view().history.loading);
}

#[test]
fn failed_list_fetch_keeps_previous_list() {
    init_logging();
    let state = open_history(vec![item(7, "shoes")]);
    let (state, _) = update(state, Msg::TabSelected(Tab::SearchForm));
    let (state, _) = update(state, Msg::TabSelected(Tab::History));

    let (state, effects) = update(
        state,
        Msg::HistorySettled {
            request_id: 2,
            result: Err(transport_failure()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.history().items(), &[item(7, "shoes")]);
    assert_eq!(
        state.view().history.error,
        Some("network error: connection refused".to_string())
    );
}

#[test]
fn failed_first_fetch_leaves_empty_list() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::TabSelected(Tab::History));

    let (state, _) = update(
        state,
        Msg::HistorySettled {
            request_id: 1,
            result: Err(transport_failure()),
        },
    );

    assert!(state.history().items().is_empty());
    assert!(state.view().history.error.is_some());
}

#[test]
fn stale_history_response_is_ignored() {
    init_logging();
    let state = open_history(vec![item(1, "old")]);
    let (state, _) = update(state, Msg::TabSelected(Tab::SearchForm));
    let (state, _) = update(state, Msg::TabSelected(Tab::History));
    let (state, _) = update(state, Msg::TabSelected(Tab::SearchForm));
    let (state, _) = update(state, Msg::TabSelected(Tab::History));

    // Request 3 answers first, then the older request 2 arrives.
    let (state, _) = update(
        state,
        Msg::HistorySettled {
            request_id: 3,
            result: Ok(vec![item(3, "newest")]),
        },
    );
    let (state, _) = update(
        state,
        Msg::HistorySettled {
            request_id: 2,
            result: Ok(vec![item(2, "stale")]),
        },
    );

    assert_eq!(state.history().items(), &[item(3, "newest")]);
}

#[test]
fn toggle_fetches_once_and_caches() {
    init_logging();
    let state = open_history(vec![item(7, "shoes")]);

    let (state, effects) = toggle(state, 7);
    assert_eq!(effects, vec![Effect::LoadResults { search_id: 7 }]);
    assert_eq!(
        state.view().history.rows[0].results,
        Some(ExpandedResults::Loading)
    );

    let (state, _) = update(
        state,
        Msg::ResultsSettled {
            search_id: 7,
            result: Ok(rows()),
        },
    );
    assert_eq!(state.history().cache().rows(7), Some(rows().as_slice()));

    // Collapse and re-expand: no further fetches.
    let (state, effects) = toggle(state, 7);
    assert!(effects.is_empty());
    assert_eq!(state.history().expanded(), None);
    let (state, effects) = toggle(state, 7);
    assert!(effects.is_empty());
    assert_eq!(state.history().expanded(), Some(7));

    match &state.view().history.rows[0].results {
        Some(ExpandedResults::Loaded(views)) => {
            let positions: Vec<_> = views.iter().map(|r| r.position).collect();
            assert_eq!(positions, vec![1, 2]);
            assert!(views[0].is_match);
            assert!(!views[1].is_match);
        }
        other => panic!("expected loaded results, got {other:?}"),
    }
}

#[test]
fn rapid_toggles_share_one_in_flight_fetch() {
    init_logging();
    let state = open_history(vec![item(7, "shoes")]);

    let (state, first) = toggle(state, 7);
    assert_eq!(first, vec![Effect::LoadResults { search_id: 7 }]);
    let (state, collapse) = toggle(state, 7);
    let (state, second) = toggle(state, 7);
    assert!(collapse.is_empty());
    assert!(second.is_empty());
    assert!(state.history().cache().is_in_flight(7));

    let (state, _) = update(
        state,
        Msg::ResultsSettled {
            search_id: 7,
            result: Ok(rows()),
        },
    );

    assert!(matches!(
        state.view().history.rows[0].results,
        Some(ExpandedResults::Loaded(ref views)) if views.len() == 2
    ));
}

#[test]
fn a_then_b_then_a_fetches_a_once() {
    init_logging();
    let state = open_history(vec![item(1, "a"), item(2, "b")]);

    let (state, effects_a) = toggle(state, 1);
    let (state, _) = update(
        state,
        Msg::ResultsSettled {
            search_id: 1,
            result: Ok(rows()),
        },
    );
    let (state, effects_b) = toggle(state, 2);
    let (state, effects_a_again) = toggle(state, 1);

    assert_eq!(effects_a, vec![Effect::LoadResults { search_id: 1 }]);
    assert_eq!(effects_b, vec![Effect::LoadResults { search_id: 2 }]);
    assert!(effects_a_again.is_empty());
    assert_eq!(state.history().expanded(), Some(1));
}

#[test]
fn late_result_for_collapsed_item_is_cached_without_reexpanding() {
    init_logging();
    let state = open_history(vec![item(1, "a"), item(2, "b")]);
    let (state, _) = toggle(state, 1);
    let (mut state, _) = toggle(state, 2);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::ResultsSettled {
            search_id: 1,
            result: Ok(rows()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.history().expanded(), Some(2));
    assert!(matches!(
        state.history().cache().get(1),
        Some(FetchState::Loaded(_))
    ));
    assert!(!state.consume_dirty());
    assert_eq!(
        state.view().history.rows[1].results,
        Some(ExpandedResults::Loading)
    );

    let (_, effects) = toggle(state, 1);
    assert!(effects.is_empty());
}

#[test]
fn failed_results_fetch_is_shown_and_retried_on_next_expand() {
    init_logging();
    let state = open_history(vec![item(7, "shoes")]);
    let (state, _) = toggle(state, 7);

    let (state, _) = update(
        state,
        Msg::ResultsSettled {
            search_id: 7,
            result: Err(LoadFailure::new(
                LoadFailureKind::Service { status: 500 },
                "Internal Server Error",
            )),
        },
    );
    assert_eq!(
        state.view().history.rows[0].results,
        Some(ExpandedResults::Failed(
            "service error 500: Internal Server Error".to_string()
        ))
    );

    let (state, _) = toggle(state, 7);
    let (_, effects) = toggle(state, 7);
    assert_eq!(effects, vec![Effect::LoadResults { search_id: 7 }]);
}

#[test]
fn only_one_item_is_expanded() {
    let mut history = HistoryViewController::new();
    assert!(history.toggle(1).is_some());
    assert!(history.toggle(2).is_some());

    assert_eq!(history.expanded(), Some(2));
    assert_eq!(history.expanded_state().map(|(id, _)| id), Some(2));
}
