//! Player command parsing.

use crate::cards::CardPosition;
use crate::session::SessionEvent;

/// A line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip the card with this position.
    Flip(CardPosition),
    PowerUp,
    Reset,
    ToggleTheme,
    Help,
    Quit,
}

pub const HELP: &str = "commands: <n> flip card n | p power-up | r reset | t theme | h help | q quit";

impl Command {
    /// Parse one input line. Cards are numbered from 1 on screen.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let command = match line.to_ascii_lowercase().as_str() {
            "p" | "power" => Command::PowerUp,
            "r" | "reset" => Command::Reset,
            "t" | "theme" => Command::ToggleTheme,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => Command::Flip(CardPosition::new(n - 1)),
                _ => return Err(format!("unknown command {line:?}; {HELP}")),
            },
        };
        Ok(Some(command))
    }

    /// The session event this command maps to, if any.
    #[must_use]
    pub fn to_event(self) -> Option<SessionEvent> {
        match self {
            Command::Flip(position) => Some(SessionEvent::Flip(position)),
            Command::PowerUp => Some(SessionEvent::PowerUp),
            Command::Reset => Some(SessionEvent::Reset),
            Command::ToggleTheme | Command::Help | Command::Quit => None,
        }
    }
}
