use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use clap::Parser;
use gigarelay_core::{
    update, AppState, Endpoints, LocaleState, Msg, Phase, SessionEvent, SessionObserver,
};
use gigarelay_engine::{EngineHandle, UploadSettings};
use relay_logging::{relay_debug, relay_info};

use super::commands::{self, ShellEvent};
use super::config::{AppConfig, Cli};
use super::effects::EffectRunner;
use super::logging;
use super::persistence::PreferenceStore;
use super::ui::progress::ProgressLine;
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_cli(Cli::parse())?;
    logging::initialize(config.log_destination, config.log_level, &config.state_dir);
    relay_info!(
        "gigarelay starting backend={} state_dir={:?}",
        config.backend_url,
        config.state_dir
    );

    let preferences = PreferenceStore::new(config.state_dir.clone());
    let platform_tag = sys_locale::get_locale();
    let persisted = preferences.load_locale();
    let locale = LocaleState::resolve(persisted.as_deref(), platform_tag.as_deref());
    relay_debug!(
        "Locale {} from persisted={:?} platform={:?}",
        locale.code(),
        persisted,
        platform_tag
    );

    let endpoints = Endpoints::new(&config.backend_url);
    let engine = EngineHandle::new(UploadSettings {
        endpoint: endpoints.upload_url(),
        ..UploadSettings::default()
    });

    let (tx, rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(engine, preferences, tx.clone());
    spawn_stdin_reader(tx.clone());

    let mut shell = Shell {
        state: AppState::new(locale, endpoints),
        runner,
        progress: ProgressLine::new(io::stdout()),
    };
    shell.render();
    if let Some(code) = config.lang_override {
        let _ = tx.send(ShellEvent::Msg(Msg::LocaleSelected(code)));
    }
    drop(tx);

    let mut input_closed = false;
    for event in rx {
        match event {
            ShellEvent::Msg(msg) => shell.dispatch(msg),
            ShellEvent::Help => shell.print(commands::HELP),
            ShellEvent::Rejected(reason) => shell.print(&format!("? {reason}")),
            ShellEvent::Quit => break,
            ShellEvent::InputClosed => {
                input_closed = true;
                if shell.state.session().phase() == Phase::Transferring {
                    relay_info!("Input closed; waiting for the running transfer");
                }
            }
        }
        if input_closed && settled(shell.state.session().phase()) {
            break;
        }
    }

    relay_info!("gigarelay shutting down");
    shell.runner.shutdown();
    Ok(())
}

struct Shell<W: Write> {
    state: AppState,
    runner: EffectRunner,
    progress: ProgressLine<W>,
}

impl<W: Write> Shell<W> {
    fn dispatch(&mut self, msg: Msg) {
        let (mut state, effects) = update(std::mem::take(&mut self.state), msg);
        let events = state.drain_session_events();
        let dirty = state.consume_dirty();
        self.state = state;

        for event in &events {
            self.progress.notify(*event);
        }
        // Progress alone only moves the in-place bar.
        let progress_only = !events.is_empty()
            && events
                .iter()
                .all(|event| matches!(event, SessionEvent::ProgressChanged(_)));
        if dirty && !progress_only {
            self.render();
        }

        self.runner.run(effects);
    }

    fn render(&mut self) {
        self.progress.close();
        let mut out = io::stdout().lock();
        let _ = writeln!(out);
        for line in render::render(&self.state.view()) {
            let _ = writeln!(out, "{line}");
        }
        let _ = write!(out, "> ");
        let _ = out.flush();
    }

    fn print(&mut self, text: &str) {
        self.progress.close();
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{text}");
        let _ = write!(out, "> ");
        let _ = out.flush();
    }
}

/// Once input has ended the shell exits, but only after a running transfer
/// has reached a terminal phase.
fn settled(phase: Phase) -> bool {
    phase != Phase::Transferring
}

fn spawn_stdin_reader(tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            for event in commands::parse_line(&line) {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
        let _ = tx.send(ShellEvent::InputClosed);
    });
}
