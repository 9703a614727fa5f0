//! Legal-move oracle over a chess rules engine

use shakmaty::uci::UciMove;
use shakmaty::{Chess, File, Move, Position, Role, Square};

use crate::error::{Error, Result};
use crate::occupancy::Occupancy;

/// Capability boundary to a chess rules engine.
///
/// The recognizer only ever asks these questions about the game, so any
/// conformant rules implementation can stand in for [`ShakmatyOracle`].
pub trait RulesOracle {
    /// Occupancy of the current confirmed game state.
    fn current_occupancy(&self) -> Occupancy;

    /// A legal move from `from` to `to`, if one exists.
    fn find_legal_move(&self, from: Square, to: Square) -> Option<Move>;

    fn is_capture(&self, mv: &Move) -> bool;

    fn is_castling(&self, mv: &Move) -> bool;

    fn is_en_passant(&self, mv: &Move) -> bool;

    /// Whether `mv` is legal in the current game state.
    fn is_legal(&self, mv: &Move) -> bool;

    /// Commits a legal move, advancing the game state.
    fn push(&mut self, mv: &Move) -> Result<()>;

    /// Returns the game to the standard starting position.
    fn reset(&mut self);
}

/// The standard oracle, backed by shakmaty's move generation.
#[derive(Debug, Clone, Default)]
pub struct ShakmatyOracle {
    position: Chess,
}

impl ShakmatyOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an arbitrary game state instead of the standard layout.
    pub fn from_position(position: Chess) -> Self {
        Self { position }
    }

    /// The full game state, for callers that need more than occupancy.
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Destination square as the sensors see it: for castling that is the
    /// king's target square, while shakmaty encodes the rook's.
    fn sensed_destination(mv: &Move) -> Square {
        match mv {
            Move::Castle { king, rook } => {
                let file = if rook.file() > king.file() {
                    File::G
                } else {
                    File::C
                };
                Square::from_coords(file, king.rank())
            }
            _ => mv.to(),
        }
    }
}

impl RulesOracle for ShakmatyOracle {
    fn current_occupancy(&self) -> Occupancy {
        self.position.board().occupied().into()
    }

    fn find_legal_move(&self, from: Square, to: Square) -> Option<Move> {
        // A pawn reaching the last rank yields four legal moves for the same
        // from/to pair, and occupancy cannot tell them apart. Promotions
        // resolve to a queen; underpromotion needs outside disambiguation.
        self.position
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from() == Some(from) && Self::sensed_destination(mv) == to)
            .find(|mv| mv.promotion().map_or(true, |role| role == Role::Queen))
    }

    fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    fn is_castling(&self, mv: &Move) -> bool {
        mv.is_castle()
    }

    fn is_en_passant(&self, mv: &Move) -> bool {
        mv.is_en_passant()
    }

    fn is_legal(&self, mv: &Move) -> bool {
        self.position.is_legal(*mv)
    }

    fn push(&mut self, mv: &Move) -> Result<()> {
        match self.position.clone().play(*mv) {
            Ok(next) => {
                self.position = next;
                Ok(())
            }
            Err(_) => Err(Error::InconsistentMove(UciMove::from_standard(*mv).to_string())),
        }
    }

    fn reset(&mut self) {
        self.position = Chess::default();
    }
}
