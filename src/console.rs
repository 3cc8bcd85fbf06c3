//! Console front end.
//!
//! Reads one line at a time, hands it to the [`Session`] trimmed and
//! upper-cased, and renders player notifications between turns. The loop
//! stops when the quit latch is set or input runs out.

use anyhow::Result;
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::adventure::{PlayerEvent, Session};
use crate::config::GameConfig;

#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    pub prompt: String,
    pub show_location_each_turn: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for ConsoleOptions {
    fn from(config: &GameConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            show_location_each_turn: config.show_location_each_turn,
        }
    }
}

/// Input lines reach the game trimmed and upper-cased.
pub fn normalize_input(line: &str) -> String {
    line.trim().to_uppercase()
}

/// Narrate the notifications the console cares about; returns how many
/// events were drained. `shown_score` is the last score the player was told
/// about and is updated as score events arrive.
pub fn render_events(
    session: &mut Session,
    events: &mut UnboundedReceiver<PlayerEvent>,
    shown_score: &mut i32,
) -> usize {
    let mut drained = 0;
    while let Ok(event) = events.try_recv() {
        drained += 1;
        match event {
            PlayerEvent::LocationChanged(room) => session.narrate(&format!("You moved to {}.", room)),
            PlayerEvent::ScoreChanged(score) => {
                if score > *shown_score {
                    session.narrate(&format!("Your score increased to {}!", score));
                } else {
                    session.narrate(&format!("Your score dropped to {}.", score));
                }
                *shown_score = score;
            }
            other => debug!("console ignoring {:?}", other),
        }
    }
    drained
}

/// Play until the player quits or `input` is exhausted.
pub async fn run_console<R>(session: &mut Session, input: R, options: &ConsoleOptions) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut events = session.subscribe();
    let mut shown_score = session.player().score();
    let mut lines = input.lines();
    let mut last_described: Option<String> = None;

    session.start();
    while session.is_running() {
        let here = session.player().location().to_string();
        if options.show_location_each_turn {
            session.narrate(&here);
        }
        if last_described.as_deref() != Some(here.as_str()) {
            session.invoke("LOOK");
            last_described = Some(here);
        }

        session.output().write(&format!("\n{}", options.prompt));
        let Some(line) = lines.next_line().await? else {
            info!("input closed; ending session");
            session.output().write_line("");
            break;
        };
        session.dispatch(&normalize_input(&line));
        render_events(session, &mut events, &mut shown_score);
    }

    let farewell = session.exit_message().to_string();
    session.narrate(&farewell);
    info!(
        "session over: score={} moves={}",
        session.player().score(),
        session.player().moves()
    );
    Ok(())
}
