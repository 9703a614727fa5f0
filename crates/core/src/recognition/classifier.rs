//! The move classifier
//!
//! Explains the delta between the confirmed and the observed occupancy as a
//! single legal chess move, or concludes that nothing recognizable happened
//! yet. The delta cardinalities decide the move category; the rules oracle
//! confirms legality and that the category actually matches.

use crate::oracle::RulesOracle;

use super::types::{MoveKind, PositionDelta, RecognizedMove};

/// Tries to explain an occupancy delta as a single legal move.
///
/// Candidate squares are tried in ascending square order (a1 first), so the
/// result is deterministic when several pairings would be legal. `None` is an
/// ordinary outcome: the reading is noise, an illegal arrangement, or a move
/// still in progress.
pub fn classify<O: RulesOracle>(oracle: &O, delta: &PositionDelta) -> Option<RecognizedMove> {
    let PositionDelta {
        appeared,
        disappeared,
        temp_lifted,
    } = *delta;

    match (disappeared.count(), appeared.count()) {
        // One square vacated, one empty square filled: a quiet move.
        (1, 1) => {
            let from = disappeared.squares().next()?;
            let to = appeared.squares().next()?;
            let mv = oracle.find_legal_move(from, to)?;
            if oracle.is_capture(&mv) || oracle.is_castling(&mv) {
                return None;
            }
            Some(RecognizedMove {
                mv,
                kind: MoveKind::Quiet,
            })
        }
        // One piece vanished outright: it captured on a square whose
        // occupant was lifted at some point along the way.
        (1, 0) if !temp_lifted.is_empty() => {
            let from = disappeared.squares().next()?;
            temp_lifted.squares().find_map(|to| {
                let mv = oracle.find_legal_move(from, to)?;
                oracle.is_capture(&mv).then_some(RecognizedMove {
                    mv,
                    kind: MoveKind::Capture,
                })
            })
        }
        // Two pieces vanished but only one square filled: en passant, with
        // either vanished square as the possible origin.
        (2, 1) => {
            let to = appeared.squares().next()?;
            disappeared.squares().find_map(|from| {
                let mv = oracle.find_legal_move(from, to)?;
                oracle.is_en_passant(&mv).then_some(RecognizedMove {
                    mv,
                    kind: MoveKind::EnPassant,
                })
            })
        }
        // Two vacated, two filled: castling, tried over all four pairings.
        (2, 2) => disappeared.squares().find_map(|from| {
            appeared.squares().find_map(|to| {
                let mv = oracle.find_legal_move(from, to)?;
                oracle.is_castling(&mv).then_some(RecognizedMove {
                    mv,
                    kind: MoveKind::Castling,
                })
            })
        }),
        // Anything else is a position still in flux.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::Occupancy;
    use crate::oracle::ShakmatyOracle;
    use crate::testutil::{occupancy_of, position_after};
    use shakmaty::{Move, Square};

    fn delta(known: Occupancy, physical: Occupancy, lifted: Occupancy) -> PositionDelta {
        PositionDelta::between(known, physical, lifted)
    }

    #[test]
    fn quiet_move() {
        let oracle = ShakmatyOracle::new();
        let physical = Occupancy::STARTING.without(Square::E2).with(Square::E4);

        let found = classify(
            &oracle,
            &delta(Occupancy::STARTING, physical, Occupancy::EMPTY),
        )
        .unwrap();
        assert_eq!(found.kind, MoveKind::Quiet);
        assert_eq!(found.mv.from(), Some(Square::E2));
        assert_eq!(found.mv.to(), Square::E4);
    }

    #[test]
    fn quiet_rule_rejects_a_castling_shaped_pair() {
        // King one square towards the rook reads like e1->g1, which the
        // oracle resolves to castling; the quiet rule must not accept it.
        let position = position_after(&["Nf3", "Nf6", "g3", "g6", "Bg2", "Bg7"]);
        let known = occupancy_of(&position);
        let oracle = ShakmatyOracle::from_position(position);
        let physical = known.without(Square::E1).with(Square::G1);

        assert!(classify(&oracle, &delta(known, physical, Occupancy::EMPTY)).is_none());
    }

    #[test]
    fn no_legal_move_between_the_squares() {
        let oracle = ShakmatyOracle::new();
        let physical = Occupancy::STARTING.without(Square::A1).with(Square::A5);

        assert!(classify(&oracle, &delta(Occupancy::STARTING, physical, Occupancy::EMPTY)).is_none());
    }

    #[test]
    fn capture_needs_a_temporarily_lifted_target() {
        let position = position_after(&["e4", "d5"]);
        let known = occupancy_of(&position);
        let oracle = ShakmatyOracle::from_position(position);
        // e4 vanished; d5 still reads occupied.
        let physical = known.without(Square::E4);

        // Without the lifted record there is nothing to pair e4 with.
        assert!(classify(&oracle, &delta(known, physical, Occupancy::EMPTY)).is_none());

        let lifted = Occupancy::EMPTY.with(Square::E4).with(Square::D5);
        let found = classify(&oracle, &delta(known, physical, lifted)).unwrap();
        assert_eq!(found.kind, MoveKind::Capture);
        assert_eq!(found.mv.from(), Some(Square::E4));
        assert_eq!(found.mv.to(), Square::D5);
    }

    #[test]
    fn en_passant_tries_both_origins() {
        let position = position_after(&["e4", "a6", "e5", "d5"]);
        let known = occupancy_of(&position);
        let oracle = ShakmatyOracle::from_position(position);
        let physical = known
            .without(Square::E5)
            .without(Square::D5)
            .with(Square::D6);

        let found = classify(&oracle, &delta(known, physical, Occupancy::EMPTY)).unwrap();
        assert_eq!(found.kind, MoveKind::EnPassant);
        assert_eq!(found.mv.from(), Some(Square::E5));
        assert_eq!(found.mv.to(), Square::D6);
    }

    #[test]
    fn castling_found_among_four_pairings() {
        let position = position_after(&["Nf3", "Nf6", "g3", "g6", "Bg2", "Bg7"]);
        let known = occupancy_of(&position);
        let oracle = ShakmatyOracle::from_position(position);
        let physical = known
            .without(Square::E1)
            .without(Square::H1)
            .with(Square::F1)
            .with(Square::G1);

        let found = classify(&oracle, &delta(known, physical, Occupancy::EMPTY)).unwrap();
        assert_eq!(found.kind, MoveKind::Castling);
        assert!(matches!(found.mv, Move::Castle { .. }));
    }

    #[test]
    fn unexplained_cardinalities_yield_nothing() {
        let oracle = ShakmatyOracle::new();
        // Three pieces lifted, one square filled.
        let physical = Occupancy::STARTING
            .without(Square::E2)
            .without(Square::D2)
            .without(Square::G1)
            .with(Square::E4);

        assert!(classify(&oracle, &delta(Occupancy::STARTING, physical, Occupancy::EMPTY)).is_none());
    }
}
