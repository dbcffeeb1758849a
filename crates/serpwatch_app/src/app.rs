use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use serpwatch_core::{update, AppState};
use serpwatch_logging::{watch_info, watch_warn};

use crate::config::{self, AppConfig};
use crate::effects::EffectRunner;
use crate::ui::commands::{self, UiEvent};
use crate::ui::render;

pub fn run_app(config_path: &Path) -> anyhow::Result<()> {
    let (config, config_problem) = match config::load(config_path) {
        Ok(Some(config)) => (config, None),
        Ok(None) => (AppConfig::default(), None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    serpwatch_logging::initialize(config.log_destination());
    if let Some(err) = config_problem {
        watch_warn!("{}; using defaults", err);
        eprintln!("Warning: {err}; using defaults");
    }

    let (event_tx, event_rx) = mpsc::channel::<UiEvent>();
    let runner = EffectRunner::new(config.client_settings(), event_tx.clone())?;
    spawn_input_reader(event_tx);

    let mut state = AppState::new();
    print_screen(&render::render(&state.view()));
    println!("{}", commands::HELP);

    for event in event_rx {
        match event {
            UiEvent::Msg(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.enqueue(effects);
                if state.consume_dirty() {
                    print_screen(&render::render(&state.view()));
                }
            }
            UiEvent::Help => println!("{}", commands::HELP),
            UiEvent::Unrecognized(message) => println!("{message}"),
            UiEvent::Quit => break,
        }
    }

    watch_info!("Shutting down");
    Ok(())
}

/// Reads commands from stdin on its own thread; end of input quits.
fn spawn_input_reader(event_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(event) = commands::parse_line(&line) {
                let quit = event == UiEvent::Quit;
                if event_tx.send(event).is_err() || quit {
                    return;
                }
            }
        }
        let _ = event_tx.send(UiEvent::Quit);
    });
}

fn print_screen(text: &str) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout);
    let _ = write!(stdout, "{text}");
    let _ = stdout.flush();
}
