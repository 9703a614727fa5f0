//! Types shared across the recognition pipeline

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shakmaty::Move;

use crate::occupancy::Occupancy;

/// How a recognized move shuffled material, as seen by the sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// One piece moved to an empty square.
    Quiet,
    /// One piece moved onto a square whose occupant had been lifted.
    Capture,
    /// Two pieces vanished, one square filled.
    EnPassant,
    /// King and rook swapped wings together.
    Castling,
}

impl MoveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::Quiet => "quiet",
            MoveKind::Capture => "capture",
            MoveKind::EnPassant => "en_passant",
            MoveKind::Castling => "castling",
        }
    }
}

/// A legal move together with the sensor-level category that matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedMove {
    pub mv: Move,
    pub kind: MoveKind,
}

/// Difference between the confirmed and the observed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDelta {
    /// Occupied now, empty in the confirmed position.
    pub appeared: Occupancy,
    /// Occupied in the confirmed position, empty now.
    pub disappeared: Occupancy,
    /// Vacated at some point since the last move, occupied again now.
    pub temp_lifted: Occupancy,
}

impl PositionDelta {
    pub fn between(known: Occupancy, physical: Occupancy, lifted: Occupancy) -> Self {
        Self {
            appeared: physical.minus(known),
            disappeared: known.minus(physical),
            temp_lifted: lifted.intersect(physical),
        }
    }
}

/// Tunables for move recognition.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// How long a divergent reading must stay unchanged before a move is
    /// read out of it. Zero recognizes immediately; a few hundred
    /// milliseconds lets a player slide a piece across intermediate squares.
    #[serde(default)]
    pub move_delay: Duration,
}

/// Something the recognizer concluded from the sensor stream.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The starting layout appeared; board and game state were reset.
    GameStart,
    /// A legal move explained the observed changes and was committed.
    MoveMade {
        mv: Move,
        kind: MoveKind,
        /// Board occupancy after the move.
        occupancy: Occupancy,
    },
}
