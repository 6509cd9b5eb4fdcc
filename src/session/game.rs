//! Game session: the board plus everything that changes while playing.
//!
//! All input goes through [`GameSession::handle`]. Time is a logical clock
//! in milliseconds that only moves on [`SessionEvent::Advance`], so tests
//! can drive delays without sleeping.

use tracing::{debug, info};

use super::event::{Notification, SessionEvent};
use super::scheduler::{Deferred, Scheduler};
use super::timer::Countdown;
use super::view::{BoardView, CardFace};
use crate::board::{BoardGenerator, BoardState};
use crate::cards::CardPosition;
use crate::catalog::{CatalogRegistry, ImageUrlTemplate};
use crate::core::{GameConfig, GameRng, Result, RulesConfig};
use crate::rules::{apply_flip, revert_mismatch, FlipOutcome, GameResult, GameStatus, IgnoreReason, Selection};

/// Builder for creating a [`GameSession`].
pub struct SessionBuilder {
    rules: RulesConfig,
    images: Option<ImageUrlTemplate>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            images: None,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Ok(Self {
            rules: config.game.clone(),
            images: Some(ImageUrlTemplate::new(config.catalog.image_url_template.clone())?),
        })
    }

    pub fn pairs(mut self, pairs: usize) -> Self {
        assert!(pairs > 0, "Board needs at least one pair");
        self.rules.pair_count = pairs;
        self
    }

    pub fn time_limit(mut self, secs: u32) -> Self {
        assert!(secs > 0, "Countdown needs at least one second");
        self.rules.time_limit_secs = secs;
        self
    }

    pub fn mismatch_delay_ms(mut self, ms: u64) -> Self {
        self.rules.mismatch_delay_ms = ms;
        self
    }

    pub fn power_up_duration_ms(mut self, ms: u64) -> Self {
        self.rules.power_up_duration_ms = ms;
        self
    }

    pub fn power_ups(mut self, charges: u32) -> Self {
        self.rules.power_ups = charges;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.rules.seed = Some(seed);
        self
    }

    pub fn images(mut self, images: ImageUrlTemplate) -> Self {
        self.images = Some(images);
        self
    }

    /// Lay out the first board and start the session.
    ///
    /// # Errors
    /// Returns `MatchError::Config` for a zero pair count or time limit, and
    /// `MatchError::NotEnoughEntries` if the catalog is too small.
    pub fn build(self, catalog: CatalogRegistry) -> Result<GameSession> {
        self.rules.validate()?;
        let images = match self.images {
            Some(images) => images,
            None => ImageUrlTemplate::new(crate::core::CatalogConfig::default().image_url_template)?,
        };
        let mut rng = match self.rules.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let generator = BoardGenerator::new(self.rules.pair_count, images);
        let board = generator.generate(&catalog, &mut rng.fork())?;

        info!(
            pairs = self.rules.pair_count,
            time_limit = self.rules.time_limit_secs,
            seed = rng.seed(),
            "session started"
        );

        Ok(GameSession {
            countdown: Countdown::new(self.rules.time_limit_secs),
            power_ups_left: self.rules.power_ups,
            rules: self.rules,
            catalog,
            generator,
            rng,
            board,
            selection: Selection::new(),
            status: GameStatus::Active,
            locked: false,
            peeking: false,
            scheduler: Scheduler::new(),
            now_ms: 0,
        })
    }
}

/// One player's game.
///
/// Invariants: at most two cards are pending comparison, and once the
/// status is terminal only [`SessionEvent::Reset`] changes anything.
pub struct GameSession {
    rules: RulesConfig,
    catalog: CatalogRegistry,
    generator: BoardGenerator,
    rng: GameRng,
    board: BoardState,
    selection: Selection,
    countdown: Countdown,
    status: GameStatus,
    /// Set while a mismatched pair waits to be turned back.
    locked: bool,
    /// Set while the power-up shows every card.
    peeking: bool,
    power_ups_left: u32,
    scheduler: Scheduler,
    now_ms: u64,
}

impl GameSession {
    /// Process one event.
    ///
    /// # Errors
    /// Returns `MatchError::InvalidPosition` for a flip off the board, and
    /// board generation errors on reset.
    pub fn handle(&mut self, event: SessionEvent) -> Result<Vec<Notification>> {
        match event {
            SessionEvent::Reset => self.reset(),
            _ if self.status.is_terminal() => Ok(vec![Notification::Ignored(IgnoreReason::GameOver)]),
            SessionEvent::Flip(position) => self.flip(position),
            SessionEvent::Tick => Ok(self.tick()),
            SessionEvent::PowerUp => Ok(self.power_up()),
            SessionEvent::Advance(now_ms) => self.advance(now_ms),
        }
    }

    fn flip(&mut self, position: CardPosition) -> Result<Vec<Notification>> {
        if self.is_locked() {
            // still validate the position so bad input is reported consistently
            self.board.card(position)?;
            return Ok(vec![Notification::Ignored(IgnoreReason::Locked)]);
        }

        let outcome = apply_flip(&mut self.board, &mut self.selection, position)?;
        let mut out = Vec::new();
        match outcome {
            FlipOutcome::FirstPick { position, item } => {
                out.push(Notification::CardRevealed { position, item });
            }
            FlipOutcome::Matched { item, first, second } => {
                out.push(Notification::CardRevealed { position: second, item });
                out.push(Notification::PairMatched {
                    item,
                    positions: [first, second],
                });
                if self.board.is_complete() {
                    out.push(self.finish(GameStatus::Won));
                }
            }
            FlipOutcome::Mismatched { first, second } => {
                let item = self.board.card(second)?.item_id;
                let revert_at_ms = self.now_ms + self.rules.mismatch_delay_ms;
                self.locked = true;
                self.scheduler.schedule(revert_at_ms, Deferred::RevertMismatch);
                out.push(Notification::CardRevealed { position: second, item });
                out.push(Notification::Mismatch {
                    positions: [first, second],
                    revert_at_ms,
                });
            }
            FlipOutcome::Ignored(reason) => out.push(Notification::Ignored(reason)),
        }
        Ok(out)
    }

    fn tick(&mut self) -> Vec<Notification> {
        let remaining = self.countdown.tick();
        let mut out = vec![Notification::TimeChanged(remaining)];
        if self.countdown.is_expired() {
            out.push(self.finish(GameStatus::Lost));
        }
        out
    }

    fn power_up(&mut self) -> Vec<Notification> {
        if self.power_ups_left == 0 || self.peeking {
            return vec![Notification::Ignored(IgnoreReason::NoPowerUp)];
        }
        self.power_ups_left -= 1;
        self.peeking = true;

        let ends_at_ms = self.now_ms + self.rules.power_up_duration_ms;
        self.scheduler.schedule(ends_at_ms, Deferred::EndPowerUp);
        debug!(ends_at_ms, left = self.power_ups_left, "power-up started");
        vec![Notification::PowerUpStarted { ends_at_ms }]
    }

    fn advance(&mut self, now_ms: u64) -> Result<Vec<Notification>> {
        self.now_ms = self.now_ms.max(now_ms);

        let mut out = Vec::new();
        while let Some((_, action)) = self.scheduler.pop_due(self.now_ms) {
            match action {
                Deferred::RevertMismatch => {
                    let hidden = revert_mismatch(&mut self.board, &mut self.selection)?;
                    self.locked = false;
                    out.push(Notification::CardsHidden(hidden));
                }
                Deferred::EndPowerUp => {
                    self.peeking = false;
                    out.push(Notification::PowerUpEnded);
                }
            }
        }
        Ok(out)
    }

    fn reset(&mut self) -> Result<Vec<Notification>> {
        self.board = self.generator.generate(&self.catalog, &mut self.rng.fork())?;
        self.selection.clear();
        self.countdown.restart();
        self.status = GameStatus::Active;
        self.locked = false;
        self.peeking = false;
        self.power_ups_left = self.rules.power_ups;
        self.scheduler.clear();
        info!(pairs = self.board.total_pairs(), "session reset");
        Ok(vec![Notification::Reset, Notification::TimeChanged(self.countdown.remaining())])
    }

    fn finish(&mut self, status: GameStatus) -> Notification {
        self.status = status;
        self.locked = true;
        self.peeking = false;
        self.scheduler.clear();

        let result = self.result();
        info!(
            ?status,
            clicks = result.clicks,
            matched = result.matched_pairs,
            elapsed = result.elapsed_secs,
            "game over"
        );
        match status {
            GameStatus::Won => Notification::Won(result),
            _ => Notification::Lost(result),
        }
    }

    /// Summary of the game so far.
    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult {
            status: self.status,
            clicks: self.board.clicks(),
            matched_pairs: self.board.matched_pairs(),
            total_pairs: self.board.total_pairs(),
            elapsed_secs: self.countdown.elapsed(),
        }
    }

    /// Is input currently refused?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked || self.peeking || self.status.is_terminal()
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogRegistry {
        &self.catalog
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn power_ups_left(&self) -> u32 {
        self.power_ups_left
    }

    #[must_use]
    pub fn is_peeking(&self) -> bool {
        self.peeking
    }

    /// Cards picked and awaiting comparison.
    #[must_use]
    pub fn selection(&self) -> &[CardPosition] {
        &self.selection
    }

    /// Current logical time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// When the next deferred callback is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    /// Snapshot for renderers.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let cards = self
            .board
            .cards()
            .map(|card| {
                let name = self
                    .catalog
                    .get(card.item_id)
                    .map(|e| e.display_name())
                    .unwrap_or_else(|| card.item_id.to_string());
                if card.matched {
                    CardFace::Matched {
                        item: card.item_id,
                        name,
                        image: card.face_image.clone(),
                    }
                } else if card.revealed || self.peeking {
                    CardFace::Shown {
                        item: card.item_id,
                        name,
                        image: card.face_image.clone(),
                    }
                } else {
                    CardFace::Hidden
                }
            })
            .collect();

        BoardView {
            cards,
            clicks: self.board.clicks(),
            matched_pairs: self.board.matched_pairs(),
            total_pairs: self.board.total_pairs(),
            time_remaining: self.countdown.remaining(),
            power_ups_left: self.power_ups_left,
            peeking: self.peeking,
            locked: self.is_locked(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, ItemId};

    fn catalog(n: u32) -> CatalogRegistry {
        (1..=n)
            .map(|i| CatalogEntry::new(ItemId::new(i), &format!("creature-{i}")).unwrap())
            .collect()
    }

    fn session(pairs: usize) -> GameSession {
        SessionBuilder::new()
            .pairs(pairs)
            .time_limit(10)
            .mismatch_delay_ms(1000)
            .power_up_duration_ms(2000)
            .seed(42)
            .build(catalog(20))
            .unwrap()
    }

    /// A position holding a different item than `pos`.
    fn other_item(session: &GameSession, pos: usize) -> usize {
        let item = session.board().card(CardPosition::new(pos)).unwrap().item_id;
        session
            .board()
            .cards()
            .position(|c| c.item_id != item)
            .unwrap()
    }

    fn partner(session: &GameSession, pos: usize) -> usize {
        let item = session.board().card(CardPosition::new(pos)).unwrap().item_id;
        session
            .board()
            .positions_of(item)
            .into_iter()
            .map(CardPosition::index)
            .find(|&p| p != pos)
            .unwrap()
    }

    fn flip(session: &mut GameSession, pos: usize) -> Vec<Notification> {
        session.handle(SessionEvent::Flip(CardPosition::new(pos))).unwrap()
    }

    #[test]
    fn test_session_creation() {
        let session = session(6);
        assert_eq!(session.board().len(), 12);
        assert_eq!(session.status(), GameStatus::Active);
        assert_eq!(session.time_remaining(), 10);
        assert_eq!(session.power_ups_left(), 1);
        assert!(!session.is_locked());
        assert!(session.view().cards.iter().all(CardFace::is_hidden));
    }

    #[test]
    fn test_match_keeps_cards_up() {
        let mut session = session(4);
        let mate = partner(&session, 0);

        flip(&mut session, 0);
        let out = flip(&mut session, mate);

        assert!(out.iter().any(|n| matches!(n, Notification::PairMatched { .. })));
        assert_eq!(session.board().matched_pairs(), 1);
        assert!(!session.is_locked());
        assert!(matches!(session.view().cards[0], CardFace::Matched { .. }));
    }

    #[test]
    fn test_mismatch_locks_until_delay() {
        let mut session = session(4);
        let other = other_item(&session, 0);

        flip(&mut session, 0);
        let out = flip(&mut session, other);
        assert!(out.contains(&Notification::Mismatch {
            positions: [CardPosition::new(0), CardPosition::new(other)],
            revert_at_ms: 1000,
        }));
        assert!(session.is_locked());
        assert_eq!(session.next_deadline(), Some(1000));

        // input ignored while locked, not counted
        let third = (0..8).find(|&p| p != 0 && p != other).unwrap();
        assert_eq!(flip(&mut session, third), vec![Notification::Ignored(IgnoreReason::Locked)]);
        assert_eq!(session.board().clicks(), 2);

        // not yet
        assert!(session.handle(SessionEvent::Advance(999)).unwrap().is_empty());
        assert!(session.is_locked());

        let out = session.handle(SessionEvent::Advance(1000)).unwrap();
        assert_eq!(
            out,
            vec![Notification::CardsHidden(vec![CardPosition::new(0), CardPosition::new(other)])]
        );
        assert!(!session.is_locked());
        assert!(session.view().cards.iter().all(CardFace::is_hidden));
    }

    #[test]
    fn test_win_when_all_pairs_found() {
        let mut session = session(3);
        let mut last = Vec::new();
        for pos in 0..6 {
            if session.board().card(CardPosition::new(pos)).unwrap().matched {
                continue;
            }
            let mate = partner(&session, pos);
            flip(&mut session, pos);
            last = flip(&mut session, mate);
        }

        assert_eq!(session.status(), GameStatus::Won);
        let result = last.iter().find_map(|n| match n {
            Notification::Won(r) => Some(r.clone()),
            _ => None,
        });
        let result = result.expect("won notification");
        assert_eq!(result.clicks, 6);
        assert_eq!(result.matched_pairs, 3);
        assert!(session.is_locked());
    }

    #[test]
    fn test_timeout_locks_input() {
        let mut session = session(4);
        let mut out = Vec::new();
        for _ in 0..10 {
            out = session.handle(SessionEvent::Tick).unwrap();
        }
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(out.iter().any(Notification::is_terminal));

        let board_before = session.board().clone();
        assert_eq!(flip(&mut session, 0), vec![Notification::Ignored(IgnoreReason::GameOver)]);
        assert_eq!(
            session.handle(SessionEvent::Tick).unwrap(),
            vec![Notification::Ignored(IgnoreReason::GameOver)]
        );
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.time_remaining(), 0);
    }

    #[test]
    fn test_timeout_cancels_pending_revert() {
        let mut session = session(4);
        let other = other_item(&session, 0);
        flip(&mut session, 0);
        flip(&mut session, other);

        for _ in 0..10 {
            session.handle(SessionEvent::Tick).unwrap();
        }
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_power_up_reveals_then_hides() {
        let mut session = session(4);
        let out = session.handle(SessionEvent::PowerUp).unwrap();
        assert_eq!(out, vec![Notification::PowerUpStarted { ends_at_ms: 2000 }]);
        assert!(session.is_peeking());
        assert!(session.view().cards.iter().all(|c| !c.is_hidden()));

        assert_eq!(flip(&mut session, 0), vec![Notification::Ignored(IgnoreReason::Locked)]);
        assert_eq!(session.board().clicks(), 0);

        let out = session.handle(SessionEvent::Advance(2000)).unwrap();
        assert_eq!(out, vec![Notification::PowerUpEnded]);
        assert!(!session.is_peeking());
        assert!(session.view().cards.iter().all(CardFace::is_hidden));

        // one-shot
        assert_eq!(
            session.handle(SessionEvent::PowerUp).unwrap(),
            vec![Notification::Ignored(IgnoreReason::NoPowerUp)]
        );
    }

    #[test]
    fn test_power_up_bypasses_mismatch_lock() {
        let mut session = session(4);
        let other = other_item(&session, 0);
        flip(&mut session, 0);
        flip(&mut session, other);
        assert!(session.is_locked());

        let out = session.handle(SessionEvent::PowerUp).unwrap();
        assert!(matches!(out[0], Notification::PowerUpStarted { .. }));

        // revert fires first, power-up ends later
        let out = session.handle(SessionEvent::Advance(5000)).unwrap();
        assert!(matches!(out[0], Notification::CardsHidden(_)));
        assert_eq!(out[1], Notification::PowerUpEnded);
        assert!(!session.is_locked());
    }

    #[test]
    fn test_reset_from_terminal() {
        let mut session = session(5);
        let mate = partner(&session, 0);
        flip(&mut session, 0);
        flip(&mut session, mate);
        session.handle(SessionEvent::PowerUp).unwrap();
        for _ in 0..10 {
            session.handle(SessionEvent::Tick).unwrap();
        }
        assert_eq!(session.status(), GameStatus::Lost);

        let out = session.handle(SessionEvent::Reset).unwrap();
        assert_eq!(out[0], Notification::Reset);
        assert_eq!(session.status(), GameStatus::Active);
        assert_eq!(session.board().len(), 10);
        assert_eq!(session.board().clicks(), 0);
        assert_eq!(session.board().matched_pairs(), 0);
        assert_eq!(session.time_remaining(), 10);
        assert_eq!(session.power_ups_left(), 1);
        assert!(session.selection().is_empty());
        assert!(!session.is_locked());
        assert!(session.board().cards().all(|c| !c.revealed));
    }

    #[test]
    fn test_invalid_flip_is_error() {
        let mut session = session(2);
        assert!(session.handle(SessionEvent::Flip(CardPosition::new(4))).is_err());
        assert_eq!(session.board().clicks(), 0);
    }

    #[test]
    fn test_clock_never_goes_back() {
        let mut session = session(2);
        session.handle(SessionEvent::Advance(500)).unwrap();
        session.handle(SessionEvent::Advance(100)).unwrap();
        assert_eq!(session.now_ms(), 500);
    }

    #[test]
    #[should_panic(expected = "Countdown needs at least one second")]
    fn test_builder_rejects_zero_time_limit() {
        let _ = SessionBuilder::new().time_limit(0);
    }

    #[test]
    fn test_zero_time_limit_config_fails_build() {
        let mut config = GameConfig::default();
        config.game.time_limit_secs = 0;
        let result = SessionBuilder::from_config(&config).unwrap().build(catalog(20));
        assert!(matches!(result, Err(crate::core::MatchError::Config(_))));
    }
}
