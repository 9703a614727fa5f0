//! Sequential state machine turning occupancy snapshots into moves

use std::time::Instant;

use shakmaty::uci::UciMove;
use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};
use crate::occupancy::Occupancy;
use crate::oracle::RulesOracle;

use super::classifier::classify;
use super::types::{GameEvent, PositionDelta, RecognizedMove, RecognizerConfig};

/// Reconstructs legal moves from a stream of board occupancy snapshots.
///
/// Feed every decoded frame to [`on_frame`](Self::on_frame) in arrival order
/// and drive the clock through [`tick`](Self::tick), either on a timer or on
/// each frame arrival; ticks are no-ops while nothing is pending. Both calls
/// are non-blocking and perform no I/O, so a single processing thread
/// suffices.
///
/// ```
/// use boardscribe_core::{MoveRecognizer, Occupancy, RecognizerConfig, ShakmatyOracle};
/// use std::time::Instant;
///
/// let mut recognizer = MoveRecognizer::new(ShakmatyOracle::new(), RecognizerConfig::default());
///
/// // The sensors report e2 empty and e4 occupied.
/// let frame = Occupancy::from_frame([0xFF, 0xFF, 0x00, 0x00, 0x10, 0x00, 0xEF, 0xFF]);
/// recognizer.on_frame(frame, Instant::now());
/// let event = recognizer.tick(Instant::now()).unwrap();
/// assert!(event.is_some());
/// ```
pub struct MoveRecognizer<O> {
    oracle: O,
    config: RecognizerConfig,
    /// Occupancy of the last confirmed game state; mirrors the oracle.
    known: Occupancy,
    /// Most recent snapshot from the board.
    physical: Occupancy,
    /// Squares vacated at some point since the last confirmed move.
    lifted: Occupancy,
    /// When the current divergence was first observed.
    pending_since: Option<Instant>,
    /// Set once recognition was attempted for the current physical position.
    attempted: bool,
}

impl<O: RulesOracle> MoveRecognizer<O> {
    pub fn new(oracle: O, config: RecognizerConfig) -> Self {
        let known = oracle.current_occupancy();
        Self {
            oracle,
            config,
            known,
            physical: known,
            lifted: Occupancy::EMPTY,
            pending_since: None,
            attempted: false,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Occupancy of the last confirmed game state.
    pub fn known(&self) -> Occupancy {
        self.known
    }

    /// Most recent snapshot received from the board.
    pub fn physical(&self) -> Occupancy {
        self.physical
    }

    /// Squares currently tracked as transiently lifted.
    pub fn lifted(&self) -> Occupancy {
        self.lifted
    }

    /// Records a decoded snapshot.
    ///
    /// The starting layout always resets the game, whatever came before;
    /// any other snapshot is pure bookkeeping until [`tick`](Self::tick)
    /// decides the reading has settled.
    pub fn on_frame(&mut self, snapshot: Occupancy, now: Instant) -> Option<GameEvent> {
        self.physical = snapshot;
        if snapshot == Occupancy::STARTING {
            return Some(self.start_game());
        }

        trace!(snapshot = %snapshot, "frame received");
        self.attempted = false;
        self.pending_since = Some(now);
        self.lifted = self.lifted.union(self.known.minus(snapshot));
        None
    }

    /// Attempts recognition once the current reading has settled.
    ///
    /// Returns `Ok(None)` while nothing is due, after a failed attempt for
    /// the current reading, or when no legal move explains the delta yet.
    /// `Err` means the classifier and the oracle disagreed; state is left
    /// untouched and the next frame retries naturally.
    pub fn tick(&mut self, now: Instant) -> Result<Option<GameEvent>> {
        if !self.is_due(now) {
            return Ok(None);
        }
        self.attempted = true;

        let delta = PositionDelta::between(self.known, self.physical, self.lifted);
        match classify(&self.oracle, &delta) {
            Some(found) => self.apply(found).map(Some),
            None => {
                debug!(
                    appeared = delta.appeared.count(),
                    disappeared = delta.disappeared.count(),
                    "no legal move explains the current reading"
                );
                Ok(None)
            }
        }
    }

    fn is_due(&self, now: Instant) -> bool {
        if self.attempted || self.physical == self.known {
            return false;
        }
        match self.pending_since {
            Some(since) => now >= since + self.config.move_delay,
            None => false,
        }
    }

    fn apply(&mut self, found: RecognizedMove) -> Result<GameEvent> {
        // Never commit a move the oracle no longer reports legal.
        if !self.oracle.is_legal(&found.mv) {
            warn!(mv = %UciMove::from_standard(found.mv), "classifier and oracle disagree on legality");
            return Err(Error::InconsistentMove(
                UciMove::from_standard(found.mv).to_string(),
            ));
        }

        self.oracle.push(&found.mv)?;
        self.known = self.physical;
        self.lifted = Occupancy::EMPTY;
        self.pending_since = None;

        info!(mv = %UciMove::from_standard(found.mv), kind = found.kind.as_str(), "move recognized");
        Ok(GameEvent::MoveMade {
            mv: found.mv,
            kind: found.kind,
            occupancy: self.known,
        })
    }

    fn start_game(&mut self) -> GameEvent {
        self.oracle.reset();
        self.known = Occupancy::STARTING;
        self.lifted = Occupancy::EMPTY;
        self.pending_since = None;
        self.attempted = false;

        info!("starting layout detected, game reset");
        GameEvent::GameStart
    }
}
