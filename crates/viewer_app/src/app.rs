use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;

use viewer_api::{ClientEvent, ClientSettings};
use viewer_core::{
    update, FormField, FormSnapshot, Msg, SessionState, SessionView,
};
use viewer_logging::viewer_warn;

use crate::commands::{self, Command};
use crate::effects::{self, EffectRunner};
use crate::render;

/// Runs the terminal browsing session until the user quits.
pub fn run(base_url: String, fragment: String) -> anyhow::Result<()> {
    let settings = ClientSettings {
        base_url,
        ..ClientSettings::default()
    };
    let runner = EffectRunner::new(settings).context("backend client failed to start")?;
    let mut state = SessionState::new();

    // Stdin reader; the loop below is the only writer of session state.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        return;
                    }
                }
                Err(_) => return,
            }
        }
    });

    println!("{}", commands::HELP);
    state = dispatch(state, Msg::HashChanged(fragment), &runner);

    loop {
        let mut idle = true;

        while let Ok(line) = line_rx.try_recv() {
            idle = false;
            let Some(command) = commands::parse(&line) else {
                if !line.trim().is_empty() {
                    println!("unrecognized command; try 'help'");
                }
                continue;
            };
            match command {
                Command::Quit => return Ok(()),
                Command::Help => println!("{}", commands::HELP),
                Command::Status => runner.fetch_status(),
                Command::Settings(action) => runner.run_action(action),
                other => {
                    if let Some(msg) = browse_msg(other, &state.view()) {
                        state = dispatch(state, msg, &runner);
                    }
                }
            }
        }

        while let Some(event) = runner.try_recv() {
            idle = false;
            effects::report_event(&event);
            if let Some(msg) = event_msg(event) {
                state = dispatch(state, msg, &runner);
                render::print_session(&state.view());
            }
        }

        if idle {
            thread::sleep(Duration::from_millis(20));
        }
    }
}

fn dispatch(state: SessionState, msg: Msg, runner: &EffectRunner) -> SessionState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

/// Translates a browsing command into a reconciler message, using the
/// current snapshot as the form's baseline values.
fn browse_msg(command: Command, view: &SessionView) -> Option<Msg> {
    let mut form = form_snapshot(view);
    let edited = match command {
        Command::NextPage => {
            if !view.has_next {
                println!("already at the last known page");
                return None;
            }
            form.page = (view.query.page + 2).to_string();
            FormField::Page
        }
        Command::PrevPage => {
            if !view.has_previous {
                println!("already at the first page");
                return None;
            }
            form.page = view.query.page.to_string();
            FormField::Page
        }
        Command::Page(raw) => {
            form.page = raw;
            FormField::Page
        }
        Command::User(user_name) => {
            form.user_name = user_name;
            FormField::UserName
        }
        Command::Keyword(keyword) => {
            form.keyword = keyword;
            FormField::Keyword
        }
        Command::ToggleMediaOnly => {
            form.has_media_only = !form.has_media_only;
            FormField::HasMediaOnly
        }
        Command::Count(raw) => {
            form.count = raw;
            FormField::Count
        }
        Command::Open(fragment) => return Some(Msg::HashChanged(fragment)),
        Command::Quit | Command::Help | Command::Status | Command::Settings(_) => return None,
    };
    Some(Msg::FormEdited { form, edited })
}

fn event_msg(event: ClientEvent) -> Option<Msg> {
    match event {
        ClientEvent::FeedsLoaded { query, result } => Some(match result {
            Ok(feeds) => Msg::FeedsLoaded { query, feeds },
            Err(err) => {
                viewer_warn!("feeds request failed: {err}");
                println!("feeds request failed: {err}");
                Msg::FeedsFailed {
                    failure: err.to_failure(),
                    query,
                }
            }
        }),
        ClientEvent::StatusLoaded { .. } | ClientEvent::ActionFinished { .. } => None,
    }
}

fn form_snapshot(view: &SessionView) -> FormSnapshot {
    FormSnapshot {
        user_name: view.query.user_name.clone().unwrap_or_default(),
        keyword: view.query.keyword.clone().unwrap_or_default(),
        has_media_only: view.query.has_media_only,
        // The form shows pages 1-based, like the URL.
        page: (view.query.page + 1).to_string(),
        count: view
            .query
            .count
            .map(|count| count.to_string())
            .unwrap_or_default(),
    }
}
