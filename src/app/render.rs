//! Text rendering of a board view.

use std::fmt::Write as _;

use crate::prefs::Theme;
use crate::rules::{GameStatus, IgnoreReason};
use crate::session::{BoardView, CardFace, Notification};

const CELL_WIDTH: usize = 12;

/// Glyphs for one theme.
struct Palette {
    hidden: char,
    matched: char,
    border: char,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            hidden: '░',
            matched: '✓',
            border: '-',
        },
        Theme::Dark => Palette {
            hidden: '▓',
            matched: '★',
            border: '=',
        },
    }
}

/// Columns for a board of `len` cards: the smallest square that fits.
#[must_use]
pub fn columns_for(len: usize) -> usize {
    let mut cols = 1;
    while cols * cols < len {
        cols += 1;
    }
    cols
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}

/// Render the board as a grid with a status line.
#[must_use]
pub fn render(view: &BoardView, theme: Theme) -> String {
    let palette = palette(theme);
    let cols = columns_for(view.cards.len());
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Time {:>3}s | Clicks {:>3} | Pairs {}/{} | Power-ups {}{}",
        view.time_remaining,
        view.clicks,
        view.matched_pairs,
        view.total_pairs,
        view.power_ups_left,
        if view.peeking { " | PEEK" } else { "" }
    );
    let rule: String = std::iter::repeat(palette.border).take(cols * (CELL_WIDTH + 1)).collect();
    let _ = writeln!(out, "{rule}");

    for (row_index, row) in view.cards.chunks(cols).enumerate() {
        for (col, face) in row.iter().enumerate() {
            let number = row_index * cols + col + 1;
            let label = match face {
                CardFace::Hidden => format!("{number:>2} {}", palette.hidden.to_string().repeat(3)),
                CardFace::Shown { name, .. } => format!("{number:>2} {}", truncate(name, CELL_WIDTH - 3)),
                CardFace::Matched { name, .. } => {
                    format!("{}{} {}", palette.matched, number, truncate(name, CELL_WIDTH - 4))
                }
            };
            let _ = write!(out, "{label:<CELL_WIDTH$} ");
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{rule}");

    match view.status {
        GameStatus::Won => out.push_str("All pairs found!\n"),
        GameStatus::Lost => out.push_str("Out of time. Press r to play again.\n"),
        GameStatus::Active => {}
    }
    out
}

/// A one-line message for notifications worth telling the player about.
#[must_use]
pub fn describe(notification: &Notification) -> Option<String> {
    match notification {
        Notification::PairMatched { .. } => Some("Match!".to_string()),
        Notification::Mismatch { .. } => Some("No match.".to_string()),
        Notification::PowerUpStarted { .. } => Some("Power-up: all cards revealed!".to_string()),
        Notification::Won(result) | Notification::Lost(result) => Some(result.to_string()),
        Notification::Ignored(IgnoreReason::Locked) => Some("Wait for the board to unlock.".to_string()),
        Notification::Ignored(IgnoreReason::NoPowerUp) => Some("No power-up available.".to_string()),
        Notification::Ignored(IgnoreReason::AlreadyRevealed) => Some("That card is already face-up.".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ItemId;
    use crate::rules::GameResult;

    fn view(cards: Vec<CardFace>) -> BoardView {
        BoardView {
            cards,
            clicks: 3,
            matched_pairs: 1,
            total_pairs: 2,
            time_remaining: 41,
            power_ups_left: 1,
            peeking: false,
            locked: false,
            status: GameStatus::Active,
        }
    }

    #[test]
    fn test_columns_for() {
        assert_eq!(columns_for(1), 1);
        assert_eq!(columns_for(4), 2);
        assert_eq!(columns_for(12), 4);
        assert_eq!(columns_for(16), 4);
        assert_eq!(columns_for(18), 5);
    }

    #[test]
    fn test_render_grid() {
        let pika = |matched: bool| {
            let (item, name, image) = (ItemId::new(25), "Pikachu".to_string(), String::new());
            if matched {
                CardFace::Matched { item, name, image }
            } else {
                CardFace::Shown { item, name, image }
            }
        };
        let text = render(&view(vec![pika(true), CardFace::Hidden, pika(true), CardFace::Hidden]), Theme::Light);

        assert!(text.starts_with("Time  41s | Clicks   3 | Pairs 1/2 | Power-ups 1\n"));
        assert!(text.contains("✓1 Pikachu"));
        assert!(text.contains(" 2 ░░░"));
        // 2 columns, 2 rows, status line, two rules
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_theme_changes_glyphs() {
        let text = render(&view(vec![CardFace::Hidden; 4]), Theme::Dark);
        assert!(text.contains("▓▓▓"));
        assert!(!text.contains('░'));
    }

    #[test]
    fn test_long_names_are_cut() {
        assert_eq!(truncate("crabominable", 9), "crabomin…");
        assert_eq!(truncate("mew", 9), "mew");
    }

    #[test]
    fn test_describe() {
        let result = GameResult {
            status: GameStatus::Won,
            clicks: 16,
            matched_pairs: 8,
            total_pairs: 8,
            elapsed_secs: 33,
        };
        assert_eq!(
            describe(&Notification::Won(result)).as_deref(),
            Some("You won! 8 pairs in 16 clicks and 33s")
        );
        assert_eq!(describe(&Notification::TimeChanged(3)), None);
    }
}
