use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use client_logging::client_info;
use prospector_client::{ClientHandle, ClientSettings};
use prospector_core::{update, DashboardState, Msg};

use crate::effects::{map_event, EffectRunner};
use crate::input::{self, Action};
use crate::persistence;
use crate::render;

/// One entry in the app loop's inbox.
enum Inbox {
    Core(Msg),
    Note(String),
    Quit,
}

pub fn run() {
    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = ClientSettings::from_env();
    client_info!("Dashboard starting against {}", settings.base_url);

    let (client, client_events) = ClientHandle::new(settings);
    let runner = EffectRunner::new(client, work_dir.clone());

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();

    // Stdin reader: one line, one action.
    let stdin_tx = inbox_tx.clone();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let item = match input::parse(&line) {
                Action::Dispatch(msg) => Inbox::Core(msg),
                Action::Help => Inbox::Note(input::HELP_TEXT.to_string()),
                Action::Unknown(reason) => Inbox::Note(reason),
                Action::Quit => Inbox::Quit,
            };
            if stdin_tx.send(item).is_err() {
                break;
            }
        }
        let _ = stdin_tx.send(Inbox::Quit);
    });

    // Client event pump: forward worker events into the same inbox.
    thread::spawn(move || {
        while let Ok(event) = client_events.recv() {
            if inbox_tx.send(Inbox::Core(map_event(event))).is_err() {
                break;
            }
        }
    });

    let mut state = DashboardState::new();

    if let Some(form) = persistence::load_form(&work_dir) {
        state = dispatch(state, Msg::RestoreForm(form), &runner);
    }
    state = dispatch(state, Msg::Started, &runner);
    println!("{}", input::HELP_TEXT);

    while let Ok(item) = inbox_rx.recv() {
        match item {
            Inbox::Core(msg) => {
                state = dispatch(state, msg, &runner);
            }
            Inbox::Note(text) => println!("{text}"),
            Inbox::Quit => break,
        }
    }

    client_info!("Dashboard shutting down");
}

fn dispatch(state: DashboardState, msg: Msg, runner: &EffectRunner) -> DashboardState {
    let (mut state, effects) = update(state, msg);
    runner.run(effects);
    if state.consume_dirty() {
        print!("{}", render::render(&state.view()));
    }
    state
}
