use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDateTime};
use serpwatch_core::{
    AppViewModel, ExpandedResults, FormView, HistoryRowView, HistoryView, ResultRowView,
    StatusMessage, Tab,
};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let (form_tab, history_tab) = match view.tab {
        Tab::SearchForm => ("[Add Search]", " Search History "),
        Tab::History => (" Add Search ", "[Search History]"),
    };
    let _ = writeln!(out, "== Search Analytics ==  {form_tab} {history_tab}");

    match view.tab {
        Tab::SearchForm => render_form(&mut out, &view.form),
        Tab::History => render_history(&mut out, &view.history),
    }
    out
}

fn render_form(out: &mut String, form: &FormView) {
    let draft = &form.draft;
    let _ = writeln!(out, "Add New Search");
    let _ = writeln!(out, "  Search engine : {}", draft.engine_id);
    let _ = writeln!(out, "  Target URL    : {}", or_placeholder(&draft.target_url));
    let _ = writeln!(out, "  Keyword       : {}", or_placeholder(&draft.keyword));
    let _ = writeln!(out, "  Top N results : {}", draft.top_n);
    let button = if form.submitting {
        "Submitting..."
    } else {
        "Add Search"
    };
    let _ = writeln!(out, "  <{button}>");

    if let Some(error) = &form.validation_error {
        let _ = writeln!(out, "! {error}");
    }
    match &form.status {
        Some(StatusMessage::Success(message)) => {
            let _ = writeln!(out, "{message}");
        }
        Some(StatusMessage::Error(message)) => {
            let _ = writeln!(out, "Error: {message}");
        }
        None => {}
    }

    if let Some(rows) = &form.results {
        let _ = writeln!(out, "Search Results");
        render_results(out, rows, "  ");
    }
}

fn render_history(out: &mut String, history: &HistoryView) {
    let _ = writeln!(out, "Search History");
    if history.loading {
        let _ = writeln!(out, "(refreshing...)");
    }
    if let Some(error) = &history.error {
        let _ = writeln!(out, "! Failed to fetch search history: {error}");
    }
    if history.rows.is_empty() {
        let _ = writeln!(out, "No search history available.");
        return;
    }
    for row in &history.rows {
        render_history_row(out, row);
    }
}

fn render_history_row(out: &mut String, row: &HistoryRowView) {
    let marker = if row.expanded { '▲' } else { '▼' };
    let _ = writeln!(
        out,
        "{marker} #{id}  Keyword: {keyword}  Target URL: {target}  Date: {date}",
        id = row.id,
        keyword = row.keyword,
        target = row.target_url,
        date = format_date(&row.date),
    );

    match &row.results {
        None => {}
        Some(ExpandedResults::Loading) => {
            let _ = writeln!(out, "    Loading results...");
        }
        Some(ExpandedResults::Failed(message)) => {
            let _ = writeln!(out, "    Could not load results: {message}");
        }
        Some(ExpandedResults::Loaded(rows)) => render_results(out, rows, "    "),
    }
}

fn render_results(out: &mut String, rows: &[ResultRowView], indent: &str) {
    if rows.is_empty() {
        let _ = writeln!(out, "{indent}No results found for this search.");
        return;
    }
    let _ = writeln!(out, "{indent}  Pos  URL  (Created At)");
    for row in rows {
        let flag = if row.is_match { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{indent}{flag} {pos:>3}  {url}  ({created})",
            pos = row.position,
            url = row.url,
            created = format_date(&row.created_at),
        );
    }
}

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        "<empty>"
    } else {
        value
    }
}

/// Formats a service timestamp for display. Zoned timestamps are shown in
/// local time, naive ones as given.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return "N/A".to_string();
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return zoned.with_timezone(&Local).format(DATE_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serpwatch_core::SearchDraft;

    fn result(position: u32, url: &str, is_match: bool) -> ResultRowView {
        ResultRowView {
            id: u64::from(position),
            position,
            url: url.to_string(),
            created_at: String::new(),
            is_match,
        }
    }

    #[test]
    fn dates_fall_back_gracefully() {
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("2024-01-01T10:30:00"), "2024-01-01 10:30:00");
        assert_eq!(format_date("2024-01-01T10:30:00.1234567"), "2024-01-01 10:30:00");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn failed_submission_is_prefixed() {
        let view = AppViewModel {
            form: FormView {
                draft: SearchDraft::default(),
                status: Some(StatusMessage::Error("Invalid URL".to_string())),
                ..FormView::default()
            },
            ..AppViewModel::default()
        };

        let text = render(&view);

        assert!(text.contains("Error: Invalid URL"));
        assert!(text.contains("<Add Search>"));
    }

    #[test]
    fn pending_submission_disables_button() {
        let view = AppViewModel {
            form: FormView {
                submitting: true,
                ..FormView::default()
            },
            ..AppViewModel::default()
        };

        assert!(render(&view).contains("<Submitting...>"));
    }

    #[test]
    fn expanded_history_row_lists_results_with_match_flag() {
        let view = AppViewModel {
            tab: Tab::History,
            history: HistoryView {
                loading: false,
                error: None,
                rows: vec![
                    HistoryRowView {
                        id: 7,
                        keyword: "shoes".to_string(),
                        target_url: "https://a.com".to_string(),
                        date: String::new(),
                        expanded: true,
                        results: Some(ExpandedResults::Loaded(vec![
                            result(1, "https://a.com/p", true),
                            result(2, "https://b.com/", false),
                        ])),
                    },
                    HistoryRowView {
                        id: 8,
                        keyword: "boots".to_string(),
                        target_url: "https://b.com".to_string(),
                        date: String::new(),
                        expanded: false,
                        results: None,
                    },
                ],
            },
            ..AppViewModel::default()
        };

        let text = render(&view);

        assert!(text.contains("▲ #7  Keyword: shoes"));
        assert!(text.contains("▼ #8  Keyword: boots"));
        assert!(text.contains("*   1  https://a.com/p"));
        assert!(text.contains("    2  https://b.com/"));
    }

    #[test]
    fn empty_history_and_empty_results() {
        let empty = AppViewModel {
            tab: Tab::History,
            ..AppViewModel::default()
        };
        assert!(render(&empty).contains("No search history available."));

        let mut out = String::new();
        render_results(&mut out, &[], "");
        assert_eq!(out, "No results found for this search.\n");
    }
}
