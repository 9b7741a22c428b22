use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use pagesearch_core::{update, AppState, Msg};
use search_logging::{search_debug, search_info, search_warn};

use super::effects::EffectRunner;
use super::ui::commands::{parse_line, Command};
use super::ui::render;
use super::{config, logging};

/// Everything the main loop reacts to: user input and engine results alike.
#[derive(Debug)]
pub enum AppEvent {
    Msgs(Vec<Msg>),
    Help,
    Invalid(String),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = config::load()?;
    logging::initialize(&config.log_settings());
    search_info!("Starting pagesearch against {}", config.api_base);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(&config, event_tx.clone())?;
    spawn_input_reader(event_tx)?;

    let mut state = AppState::default();
    let mut stdout = io::stdout();
    write_lines(&mut stdout, &render::help())?;
    write_lines(&mut stdout, &render::render(&state.view()))?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msgs(msgs) => {
                for msg in msgs {
                    state = dispatch_msg(state, msg, &runner);
                }
                if state.consume_dirty() {
                    write_lines(&mut stdout, &render::render(&state.view()))?;
                }
            }
            AppEvent::Help => write_lines(&mut stdout, &render::help())?,
            AppEvent::Invalid(reason) => {
                write_lines(&mut stdout, &[format!("{reason} (type `help` for commands)")])?
            }
            AppEvent::Quit => break,
        }
    }

    search_info!("Shutting down");
    Ok(())
}

fn dispatch_msg(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    search_debug!("dispatch {:?}", msg);
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn spawn_input_reader(events: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("pagesearch-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        search_warn!("stdin read failed: {}", err);
                        break;
                    }
                };
                let Some(event) = input_event(&line) else {
                    continue;
                };
                let quit = matches!(event, AppEvent::Quit);
                if events.send(event).is_err() || quit {
                    return;
                }
            }
            let _ = events.send(AppEvent::Quit);
        })?;
    Ok(())
}

fn input_event(line: &str) -> Option<AppEvent> {
    match parse_line(line) {
        Ok(None) => None,
        Ok(Some(Command::Help)) => Some(AppEvent::Help),
        Ok(Some(Command::Quit)) => Some(AppEvent::Quit),
        Ok(Some(command)) => Some(AppEvent::Msgs(command.into_msgs())),
        Err(err) => Some(AppEvent::Invalid(err.to_string())),
    }
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_lines_map_to_events() {
        assert!(input_event("  ").is_none());
        assert!(matches!(input_event("help"), Some(AppEvent::Help)));
        assert!(matches!(input_event("q"), Some(AppEvent::Quit)));
        assert!(matches!(
            input_event("next"),
            Some(AppEvent::Msgs(msgs)) if msgs == vec![Msg::NextClicked]
        ));
        assert!(matches!(
            input_event("warp 9"),
            Some(AppEvent::Invalid(reason)) if reason.contains("warp")
        ));
    }

    #[test]
    fn write_lines_ends_with_blank_line() {
        let mut out = Vec::new();
        write_lines(&mut out, &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n\n");
    }
}
