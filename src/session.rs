//! Game session driver.
//!
//! Owns the live game state and the single pending computer reply, and
//! relays state changes to the presentation layer over a channel.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::engine::{
    apply_move, new_game, status_label, GameState, Mark, Mode, MoveError, MoveOutcome, Outcome,
    Position,
};
use crate::opponent::select_computer_move;
use crate::schedule::{schedule_reply, ComputerReply, ScheduledMove};
use crate::settings::{SessionSettings, Theme};

/// Messages sent from the session to the presentation layer.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Game state was replaced (move applied or game reset).
    StateChanged {
        /// The new state.
        state: GameState,
        /// Its outcome.
        outcome: Outcome,
        /// Projected status label, e.g. `"Current: X"`.
        status: String,
    },
    /// A mark was placed.
    MoveMade {
        /// The placed mark.
        mark: Mark,
        /// Where it landed.
        position: Position,
    },
    /// The computer's reply has been scheduled.
    ComputerThinking,
    /// The game reached a terminal outcome.
    GameOver {
        /// The terminal outcome.
        outcome: Outcome,
    },
    /// The visual theme was toggled.
    ThemeChanged(Theme),
}

/// Drives one interactive game: human input, the delayed computer
/// reply, resets, and mode/theme switches.
///
/// Every accepted state change bumps the session version; a scheduled
/// reply carries the version it was computed against and is discarded
/// when they no longer match by the time it fires.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    outcome: Outcome,
    version: u64,
    settings: SessionSettings,
    pending: Option<ScheduledMove>,
    reply_tx: mpsc::UnboundedSender<ComputerReply>,
    reply_rx: mpsc::UnboundedReceiver<ComputerReply>,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
}

impl GameSession {
    /// Creates a session and announces the initial state.
    #[instrument(skip(event_tx))]
    pub fn new(settings: SessionSettings, event_tx: mpsc::UnboundedSender<SessionEvent>) -> Self {
        info!(mode = settings.mode.label(), "starting game session");
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        let session = Self {
            state: new_game(settings.mode),
            outcome: Outcome::InProgress,
            version: 0,
            settings,
            pending: None,
            reply_tx,
            reply_rx,
            event_tx,
        };
        session.emit_state();
        session
    }

    /// The live game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Outcome of the live state.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Current state version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current visual theme.
    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// True while a computer reply is scheduled but not yet applied.
    pub fn has_pending_reply(&self) -> bool {
        self.pending.is_some()
    }

    // ─────────────────────────────────────────────────────────────
    //  Input paths
    // ─────────────────────────────────────────────────────────────

    /// Forwards a human cell selection (index 0-8) to the dispatcher.
    ///
    /// # Errors
    ///
    /// Rejections leave the session untouched; they are returned for
    /// callers that want them and logged at debug level, since an
    /// occupied cell or a click during the computer's turn is normal
    /// input, not a failure.
    #[instrument(skip(self), fields(version = self.version))]
    pub fn select_cell(&mut self, index: usize) -> Result<(), MoveError> {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "cell index out of bounds");
            return Err(MoveError::OutOfBounds(index));
        };
        match apply_move(&self.state, index, None) {
            Ok(applied) => {
                self.commit(applied, position);
                Ok(())
            }
            Err(error) => {
                debug!(%error, index, "cell selection rejected");
                Err(error)
            }
        }
    }

    /// Applies a fired computer reply; stale replies are discarded.
    ///
    /// Returns true when the reply was applied.
    #[instrument(skip(self), fields(version = self.version))]
    pub fn apply_reply(&mut self, reply: ComputerReply) -> bool {
        if self.pending.as_ref().map(ScheduledMove::version) == Some(reply.version) {
            self.pending = None;
        }
        if reply.version != self.version {
            debug!(reply_version = reply.version, "stale computer reply discarded");
            return false;
        }

        let Some(mark) = self.state.mode().computer_mark() else {
            warn!("computer reply delivered in a human-vs-human game");
            return false;
        };
        match apply_move(&self.state, reply.position.index(), Some(mark)) {
            Ok(applied) => {
                self.commit(applied, reply.position);
                true
            }
            Err(error) => {
                // The version matched, so the board cannot have changed
                // under the scheduled move.
                warn!(%error, "scheduled computer reply rejected");
                false
            }
        }
    }

    /// Waits for the next scheduled reply and applies it.
    ///
    /// Returns true when the reply was applied, false when it had gone
    /// stale.
    pub async fn deliver_next_reply(&mut self) -> bool {
        match self.reply_rx.recv().await {
            Some(reply) => self.apply_reply(reply),
            None => false,
        }
    }

    /// Applies a reply that has already fired, without waiting.
    ///
    /// Returns `None` when no reply is queued.
    pub fn try_deliver_reply(&mut self) -> Option<bool> {
        let reply = self.reply_rx.try_recv().ok()?;
        Some(self.apply_reply(reply))
    }

    // ─────────────────────────────────────────────────────────────
    //  Resets and settings
    // ─────────────────────────────────────────────────────────────

    /// Abandons the current game and starts a fresh one in `mode`.
    ///
    /// Cancels any pending computer reply before the new state lands,
    /// so a stale timer can never touch the fresh board.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: Mode) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.version += 1;
        self.settings.mode = mode;
        self.state = new_game(mode);
        self.outcome = Outcome::InProgress;
        info!(mode = mode.label(), version = self.version, "game reset");
        self.emit_state();
    }

    /// Switches play mode; always restarts the game.
    pub fn set_mode(&mut self, mode: Mode) {
        self.reset(mode);
    }

    /// Flips the visual theme. Game state and version are unaffected.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) -> Theme {
        self.settings.theme = self.settings.theme.toggle();
        debug!(theme = self.settings.theme.label(), "theme toggled");
        self.send(SessionEvent::ThemeChanged(self.settings.theme));
        self.settings.theme
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn commit(&mut self, applied: MoveOutcome, position: Position) {
        // The dispatcher flipped the turn, so the mark that was just
        // placed is the one no longer up.
        let placed = applied.state.next_mark().other();
        self.version += 1;
        self.state = applied.state;
        self.outcome = applied.outcome;

        self.send(SessionEvent::MoveMade {
            mark: placed,
            position,
        });
        debug!(
            mark = %placed,
            board = %self.state.board(),
            version = self.version,
            "move committed"
        );
        self.emit_state();
        if applied.schedule_computer_move {
            self.schedule_computer_reply();
        }
        if self.outcome.is_terminal() {
            self.send(SessionEvent::GameOver {
                outcome: self.outcome,
            });
        }
    }

    fn schedule_computer_reply(&mut self) {
        let Some(position) = select_computer_move(self.state.board()) else {
            // Unreachable: the dispatcher only asks for a reply on an
            // in-progress board.
            warn!("no empty cell for the scheduled computer move");
            return;
        };
        debug!(
            position = position.index(),
            version = self.version,
            "scheduling computer reply"
        );
        self.send(SessionEvent::ComputerThinking);
        self.pending = Some(schedule_reply(
            self.version,
            position,
            self.settings.reply_delay,
            self.reply_tx.clone(),
        ));
    }

    fn emit_state(&self) {
        self.send(SessionEvent::StateChanged {
            state: self.state.clone(),
            outcome: self.outcome,
            status: status_label(&self.state, &self.outcome),
        });
    }

    fn send(&self, event: SessionEvent) {
        // The presentation layer may have shut down already.
        let _ = self.event_tx.send(event);
    }
}
