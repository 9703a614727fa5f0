//! Move recognition from occupancy snapshots

mod classifier;
mod recognizer;
mod types;

pub use classifier::classify;
pub use recognizer::MoveRecognizer;
pub use types::{GameEvent, MoveKind, PositionDelta, RecognizedMove, RecognizerConfig};
