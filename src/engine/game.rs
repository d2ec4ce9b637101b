//! The concentration state machine.
//!
//! ## Control Flow
//!
//! The presentation adapter forwards user input to the two input hooks
//! (`select_card`, `restart`) and feeds elapsed time through
//! `advance_time`. Every call returns the `GameEvent`s it produced; the
//! adapter mirrors them into display updates or re-renders from
//! `snapshot()`.
//!
//! ## Legality
//!
//! A selection is a silent no-op when the round has ended, the board is
//! locked, the position is out of range or already matched, or the card
//! is the sole pending selection. These are deliberate UX rules, not
//! errors.
//!
//! ## Scheduling
//!
//! The engine is single-threaded and event-driven. The only suspension
//! points are the whole-second timer tick and the one-shot unflip of a
//! mismatched pair, both owned by the state and fired from inside
//! `advance_time`. Restart invalidates anything still pending, so a
//! stale task can never touch a later round's board.
//!
//! ```
//! use concentration::{GameConfig, GamePhase, GameState};
//!
//! let mut game = GameState::new(GameConfig::classic().with_seed(7)).expect("valid config");
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! // Reveal one card and let a second of play pass.
//! game.select_card(0);
//! game.advance_time(1000);
//! assert_eq!(game.stats().elapsed_seconds, 1);
//! ```

use im::Vector;
use tracing::{debug, info};

use crate::board::Board;
use crate::core::config::GameConfig;
use crate::core::error::ConfigError;
use crate::core::phase::{EndMessage, GamePhase};
use crate::core::rng::GameRng;
use crate::core::stats::RoundStats;
use crate::deck::{self, Symbol, SymbolRegistry};
use crate::view::{CardView, GameEvent, GameSnapshot};

use super::clock::{GameClock, PendingUnflip};
use super::selection::Selection;

/// The complete game state.
///
/// Owns the board, selection, statistics, RNG, and scheduled tasks; all
/// mutation goes through its methods.
pub struct GameState {
    config: GameConfig,
    registry: SymbolRegistry,
    /// The unshuffled 2n-card deck, reshuffled each round.
    template: Vec<Symbol>,
    pair_count: u32,
    board: Board,
    selection: Selection,
    stats: RoundStats,
    phase: GamePhase,
    locked: bool,
    /// Round generation; bumped on restart to invalidate scheduled tasks.
    round: u64,
    clock: GameClock,
    pending_unflip: Option<PendingUnflip>,
    rng: GameRng,
    history: Vector<GameEvent>,
}

impl GameState {
    /// Validate the configuration and start the first round.
    ///
    /// The adapter should render a full board from `snapshot()` after
    /// construction; the opening `RoundStarted` event is in the history.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let registry = SymbolRegistry::from_configs(&config.symbols);
        let template = deck::build_deck(&config.alphabet())?;
        let pair_count = config.pair_count();
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let stats = RoundStats::fresh(config.max_guesses);

        let mut state = Self {
            config,
            registry,
            template,
            pair_count,
            board: Board::from_deck(Vec::new()),
            selection: Selection::new(),
            stats,
            phase: GamePhase::Playing,
            locked: false,
            round: 0,
            clock: GameClock::new(),
            pending_unflip: None,
            rng,
            history: Vector::new(),
        };

        let mut events = Vec::new();
        state.start_round(&mut events);
        Ok(state)
    }

    // === Input Hooks ===

    /// Select the card at `position`.
    ///
    /// First card of a pair: revealed and recorded as pending. Second
    /// card: revealed, the move counter increments, and the pair is
    /// evaluated. Illegal selections return no events and change nothing.
    pub fn select_card(&mut self, position: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.phase.is_terminal() || self.locked || self.selection.is_full() {
            return events;
        }
        let Some(card) = self.board.card(position) else {
            return events;
        };
        if card.is_matched() || self.selection.sole() == Some(position) {
            return events;
        }

        let symbol = card.symbol();
        if let Some(card) = self.board.card_mut(position) {
            card.reveal();
        }
        self.emit(&mut events, GameEvent::CardRevealed { position, symbol });

        match self.selection.sole() {
            None => self.selection.push(position),
            Some(first) => {
                self.selection.push(position);
                self.stats.move_count += 1;
                self.emit(
                    &mut events,
                    GameEvent::MoveCompleted {
                        move_count: self.stats.move_count,
                    },
                );
                self.resolve_pair(first, position, &mut events);
            }
        }

        events
    }

    /// Abandon the current round and start a fresh one with the same
    /// alphabet.
    ///
    /// Cancels the pending unflip and the timer before reshuffling; a
    /// task scheduled in the old round can never fire afterwards.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.round += 1;
        self.pending_unflip = None;
        self.start_round(&mut events);
        events
    }

    /// Advance logical time by `delta_ms`, firing due tasks in timestamp
    /// order.
    ///
    /// Timer ticks fire once per whole second while the round is in play;
    /// the pending unflip fires at its deadline. An unflip sharing a
    /// deadline with a tick fires first.
    pub fn advance_time(&mut self, delta_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let target = self.clock.now_ms() + delta_ms;

        loop {
            let next_unflip = self
                .pending_unflip
                .as_ref()
                .map(|pending| pending.due_at_ms)
                .filter(|&at| at <= target);
            let next_tick = if self.phase == GamePhase::Playing {
                Some(self.clock.next_tick_ms()).filter(|&at| at <= target)
            } else {
                None
            };

            let fire_unflip = match (next_unflip, next_tick) {
                (None, None) => break,
                (Some(unflip_at), Some(tick_at)) => unflip_at <= tick_at,
                (Some(_), None) => true,
                (None, Some(_)) => false,
            };

            if fire_unflip {
                if let Some(pending) = self.pending_unflip.take() {
                    self.clock.advance_to(pending.due_at_ms);
                    self.fire_unflip(pending, &mut events);
                }
            } else {
                let at = self.clock.next_tick_ms();
                self.clock.advance_to(at);
                self.clock.schedule_next_tick();
                self.stats.elapsed_seconds += 1;
                self.emit(
                    &mut events,
                    GameEvent::TimerTick {
                        elapsed_seconds: self.stats.elapsed_seconds,
                    },
                );
            }
        }

        self.clock.advance_to(target);
        events
    }

    // === Observable State ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current round statistics.
    #[must_use]
    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Is the board rejecting selections?
    ///
    /// True during the mismatch-unflip window and in terminal phases.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked || self.phase.is_terminal()
    }

    /// Distinct pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.pair_count
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Display name for a symbol, if configured.
    #[must_use]
    pub fn symbol_name(&self, symbol: Symbol) -> Option<&str> {
        self.registry.name(symbol)
    }

    /// Every event emitted since construction, across rounds.
    #[must_use]
    pub fn event_history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    /// Observable state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cards: self.board.cards().iter().map(CardView::from_card).collect(),
            stats: self.stats,
            phase: self.phase,
            locked: self.is_locked(),
            message: EndMessage::for_phase(self.phase),
        }
    }

    // === Transitions ===

    fn start_round(&mut self, events: &mut Vec<GameEvent>) {
        self.board = Board::from_deck(deck::shuffled(&self.template, &mut self.rng));
        self.selection.clear();
        self.stats = RoundStats::fresh(self.config.max_guesses);
        self.phase = GamePhase::Playing;
        self.locked = false;
        self.clock.reset();

        self.emit(
            events,
            GameEvent::RoundStarted {
                pair_count: self.pair_count,
                max_guesses: self.config.max_guesses,
            },
        );
        info!(
            pair_count = self.pair_count,
            seed = self.rng.seed(),
            round = self.round,
            "round started"
        );
    }

    fn resolve_pair(&mut self, first: usize, second: usize, events: &mut Vec<GameEvent>) {
        let (Some(a), Some(b)) = (self.board.card(first), self.board.card(second)) else {
            return;
        };
        let symbol = a.symbol();

        if a.symbol() == b.symbol() {
            if let Some(card) = self.board.card_mut(first) {
                card.mark_matched();
            }
            if let Some(card) = self.board.card_mut(second) {
                card.mark_matched();
            }
            self.stats.matched_pairs += 1;
            self.selection.clear();
            self.emit(events, GameEvent::PairMatched { first, second, symbol });

            if self.stats.matched_pairs == self.pair_count {
                self.phase = GamePhase::Won;
                self.emit(events, GameEvent::Won { stats: self.stats });
                info!(
                    move_count = self.stats.move_count,
                    elapsed_seconds = self.stats.elapsed_seconds,
                    "round won"
                );
            }
        } else {
            self.locked = true;
            self.stats.remaining_guesses = self.stats.remaining_guesses.saturating_sub(1);
            self.emit(
                events,
                GameEvent::PairMismatched {
                    first,
                    second,
                    remaining_guesses: self.stats.remaining_guesses,
                },
            );

            if self.stats.remaining_guesses == 0 {
                // The failing pair stays face-up; no unflip is scheduled.
                self.phase = GamePhase::Lost;
                self.emit(events, GameEvent::Lost { stats: self.stats });
                info!(move_count = self.stats.move_count, "round lost");
            } else {
                self.pending_unflip = Some(PendingUnflip {
                    first,
                    second,
                    due_at_ms: self.clock.now_ms() + self.config.unflip_delay_ms,
                    round: self.round,
                });
            }
        }
    }

    fn fire_unflip(&mut self, pending: PendingUnflip, events: &mut Vec<GameEvent>) {
        if pending.round != self.round {
            // Stale task from a round that was restarted away.
            return;
        }

        if let Some(card) = self.board.card_mut(pending.first) {
            card.hide();
        }
        if let Some(card) = self.board.card_mut(pending.second) {
            card.hide();
        }
        self.selection.clear();
        self.locked = false;
        self.emit(
            events,
            GameEvent::CardsHidden {
                first: pending.first,
                second: pending.second,
            },
        );
    }

    fn emit(&mut self, out: &mut Vec<GameEvent>, event: GameEvent) {
        debug!(?event, "transition");
        self.history.push_back(event.clone());
        out.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn classic(seed: u64) -> GameState {
        GameState::new(GameConfig::classic().with_seed(seed)).expect("classic config is valid")
    }

    #[test]
    fn test_new_starts_face_down() {
        let game = classic(42);

        assert_eq!(game.board().len(), 16);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(!game.is_locked());
        assert!(game.board().face_up_unmatched().is_empty());
        assert_eq!(game.stats(), RoundStats::fresh(7));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = GameState::new(GameConfig::new(Vec::new()));
        assert_eq!(err.err(), Some(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_first_selection_reveals() {
        let mut game = classic(42);

        let events = game.select_card(0);

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::CardRevealed { position: 0, .. }));
        assert_eq!(game.board().face_up_unmatched(), vec![0]);
        assert_eq!(game.stats().move_count, 0);
    }

    #[test]
    fn test_reselecting_sole_card_is_ignored() {
        let mut game = classic(42);

        game.select_card(0);
        let events = game.select_card(0);

        assert!(events.is_empty());
        assert_eq!(game.board().face_up_unmatched(), vec![0]);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut game = classic(42);

        assert!(game.select_card(99).is_empty());
        assert!(game.board().face_up_unmatched().is_empty());
    }

    #[test]
    fn test_symbol_names_resolve() {
        let game = classic(42);
        let symbol = game.board().cards()[0].symbol();

        assert!(game.symbol_name(symbol).is_some());
        assert_eq!(game.symbol_name(Symbol::new(999)), None);
    }

    #[test]
    fn test_history_records_round_start() {
        let game = classic(42);

        assert!(matches!(
            game.event_history().front(),
            Some(GameEvent::RoundStarted { pair_count: 8, max_guesses: 7 })
        ));
    }

    #[test]
    fn test_snapshot_hides_face_down_symbols() {
        let mut game = classic(42);

        for card in game.snapshot().cards {
            assert!(card.symbol.is_none());
        }

        game.select_card(3);
        let snapshot = game.snapshot();
        assert!(snapshot.cards[3].symbol.is_some());
        assert!(snapshot.cards[4].symbol.is_none());
    }
}
