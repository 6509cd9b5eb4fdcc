//! Terminal event loop.
//!
//! Single task: stdin lines, a one-second countdown ticker and the
//! session's next deferred deadline are multiplexed with `select!`, and
//! every resulting event goes through `GameSession::handle`.

use std::io::ErrorKind;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::command::{Command, HELP};
use super::render::{describe, render};
use crate::core::{MatchError, Result};
use crate::prefs::{save_theme, PreferenceStore, Theme};
use crate::session::{GameSession, Notification, SessionEvent};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// One read from stdin.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Closed,
    Line(std::result::Result<Option<Command>, String>),
}

/// Classify a stdin read. Undecodable lines count as unknown commands.
fn read_input(line: std::io::Result<Option<String>>) -> Result<Input> {
    match line {
        Ok(Some(line)) => Ok(Input::Line(Command::parse(&line))),
        Ok(None) => Ok(Input::Closed),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            warn!(error = %e, "unreadable input line");
            Ok(Input::Line(Err(format!("unknown command; {HELP}"))))
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the game until the player quits or stdin closes.
pub async fn run<S: PreferenceStore>(mut session: GameSession, mut store: S, mut theme: Theme) -> Result<()> {
    let start = Instant::now();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let second = Duration::from_secs(1);
    let mut ticker = interval_at(start + second, second);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut messages = vec![HELP.to_string()];
    draw(&mut stdout, &session, theme, &messages).await?;

    loop {
        let deadline = session
            .next_deadline()
            .map(|ms| start + Duration::from_millis(ms));

        let mut redraw = false;
        messages.clear();

        let event = tokio::select! {
            line = lines.next_line() => {
                let parsed = match read_input(line)? {
                    Input::Closed => {
                        debug!("stdin closed");
                        break;
                    }
                    Input::Line(parsed) => parsed,
                };
                redraw = true;
                match parsed {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::ToggleTheme)) => {
                        theme = theme.toggle();
                        if let Err(e) = save_theme(&mut store, theme) {
                            warn!(error = %e, "could not save theme");
                        }
                        None
                    }
                    Ok(Some(Command::Help)) => {
                        messages.push(HELP.to_string());
                        None
                    }
                    Ok(Some(command)) => command.to_event(),
                    Ok(None) => None,
                    Err(message) => {
                        messages.push(message);
                        None
                    }
                }
            }
            _ = ticker.tick() => Some(SessionEvent::Tick),
            () = wait_for(deadline) => None,
        };

        let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let mut notifications = session.handle(SessionEvent::Advance(now_ms))?;

        if let Some(event) = event {
            match session.handle(event) {
                Ok(more) => notifications.extend(more),
                Err(MatchError::InvalidPosition { position, board_len }) => {
                    messages.push(format!("No card {}; pick 1-{board_len}.", position + 1));
                }
                Err(e) => return Err(e),
            }
            if event == SessionEvent::Reset {
                ticker.reset();
            }
        }

        for notification in &notifications {
            if !matches!(notification, Notification::Ignored(_)) {
                redraw = true;
            }
            if let Some(message) = describe(notification) {
                messages.push(message);
            }
        }
        if redraw {
            draw(&mut stdout, &session, theme, &messages).await?;
        }
    }

    stdout.flush().await?;
    Ok(())
}

async fn draw(out: &mut tokio::io::Stdout, session: &GameSession, theme: Theme, messages: &[String]) -> Result<()> {
    let mut frame = String::from(CLEAR_SCREEN);
    frame.push_str(&render(&session.view(), theme));
    for message in messages {
        frame.push_str(message);
        frame.push('\n');
    }
    frame.push_str("> ");
    out.write_all(frame.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_parses_lines() {
        assert_eq!(read_input(Ok(Some("r".into()))).unwrap(), Input::Line(Ok(Some(Command::Reset))));
        assert_eq!(read_input(Ok(None)).unwrap(), Input::Closed);
    }

    #[test]
    fn test_undecodable_line_is_unknown_command() {
        let err = std::io::Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        match read_input(Err(err)).unwrap() {
            Input::Line(Err(message)) => assert!(message.starts_with("unknown command")),
            other => panic!("expected unknown command, got {other:?}"),
        }
    }

    #[test]
    fn test_other_read_errors_propagate() {
        let err = std::io::Error::new(ErrorKind::BrokenPipe, "gone");
        assert!(matches!(read_input(Err(err)), Err(MatchError::Io(_))));
    }
}
