use serpwatch_core::{DraftField, Msg, Tab};

pub const HELP: &str = "\
Commands:
  form                  show the search form
  history               show the search history (refetches it)
  set <field> <value>   edit a form field: targetUrl, keyword, topNResult, searchEngineId
  submit                submit the search form
  toggle <id>           expand or collapse a history entry
  show                  redraw the current view
  help                  show this help
  quit                  exit";

/// Everything the dispatch loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Msg(Msg),
    Help,
    Quit,
    Unrecognized(String),
}

/// Parses one line typed by the user. Blank lines yield nothing.
pub fn parse_line(line: &str) -> Option<UiEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command {
        "form" => UiEvent::Msg(Msg::TabSelected(Tab::SearchForm)),
        "history" => UiEvent::Msg(Msg::TabSelected(Tab::History)),
        "submit" => UiEvent::Msg(Msg::SubmitClicked),
        "show" => UiEvent::Msg(Msg::RedrawRequested),
        "help" | "?" => UiEvent::Help,
        "quit" | "exit" => UiEvent::Quit,
        "set" => parse_set(rest),
        "toggle" => match rest.parse() {
            Ok(id) => UiEvent::Msg(Msg::HistoryItemToggled(id)),
            Err(_) => UiEvent::Unrecognized(format!("toggle needs a numeric id, got {rest:?}")),
        },
        other => UiEvent::Unrecognized(format!("unknown command {other:?}; type help")),
    };
    Some(event)
}

fn parse_set(rest: &str) -> UiEvent {
    let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if name.is_empty() {
        return UiEvent::Unrecognized("set needs a field name".to_string());
    }
    match name.parse::<DraftField>() {
        Ok(field) => UiEvent::Msg(Msg::FieldEdited {
            field,
            raw: value.trim().to_string(),
        }),
        Err(err) => UiEvent::Unrecognized(err.to_string()),
    }
}
