//! Shared test fixtures

use shakmaty::san::San;
use shakmaty::{Chess, Position};

use crate::occupancy::Occupancy;

/// Replays a sequence of SAN moves from the starting position.
pub(crate) fn position_after(moves: &[&str]) -> Chess {
    let mut position = Chess::default();
    for move_str in moves {
        let san: San = move_str.parse().expect("valid SAN");
        let mv = san.to_move(&position).expect("legal move");
        position = position.play(mv).expect("playable move");
    }
    position
}

/// Occupancy a sensor board would report for a position.
pub(crate) fn occupancy_of(position: &Chess) -> Occupancy {
    Occupancy::from(position.board().occupied())
}
