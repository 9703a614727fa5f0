//! Boardscribe Core Library
//!
//! Reconstructs a sequence of legal chess moves from the occupancy snapshots
//! a sensor chessboard reports, so that over-the-board play can be recorded,
//! broadcast, or analyzed. The sensors only see occupied/unoccupied squares;
//! the [`recognition`] module turns that partial, temporally smeared signal
//! into confirmed moves with the help of a legal-move [`oracle`].

pub mod error;
pub mod occupancy;
pub mod oracle;
pub mod recognition;
pub mod wire;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{Error, Result};
pub use occupancy::Occupancy;
pub use oracle::{RulesOracle, ShakmatyOracle};
pub use recognition::{GameEvent, MoveKind, MoveRecognizer, RecognizedMove, RecognizerConfig};
pub use wire::FrameAssembler;
