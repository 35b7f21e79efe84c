//! Position module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - pseudo-legal and legal move generation, perft
//! - `make_unmake.rs` - apply/undo round-trip correctness
//! - `rules.rs` - castling, en passant, promotion, terminal states
//! - `eval.rs` - static evaluation
//! - `search.rs` - negamax and pruning behavior
//! - `proptest.rs` - property-based tests


use super::{Color, Move, Position, Square};

/// Parse a square from "e4"-style notation.
pub(crate) fn sq(notation: &str) -> Square {
    notation.parse().expect("bad square notation")
}

/// Find the legal move with this origin and destination, panicking if
/// the position does not allow it.
pub(crate) fn find_move(position: &mut Position, from: Square, to: Square) -> Move {
    position
        .valid_moves()
        .iter()
        .find(|m| m.from == from && m.to == to)
        .copied()
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}

/// Apply a sequence of "e2e4"-style coordinate moves in order.
pub(crate) fn play(position: &mut Position, moves: &[&str]) {
    for notation in moves {
        let from = sq(&notation[..2]);
        let to = sq(&notation[2..4]);
        let mv = find_move(position, from, to);
        position.apply_move(mv);
    }
}

/// Assert that every externally observable component of two positions
/// matches.
pub(crate) fn assert_same_position(a: &Position, b: &Position) {
    assert_eq!(a.board(), b.board(), "board contents differ");
    assert_eq!(a.white_to_move(), b.white_to_move(), "side to move differs");
    assert_eq!(
        a.castling_rights(),
        b.castling_rights(),
        "castling rights differ"
    );
    assert_eq!(
        a.en_passant_target(),
        b.en_passant_target(),
        "en passant target differs"
    );
    for color in Color::BOTH {
        assert_eq!(
            a.king_square(color),
            b.king_square(color),
            "{color} king cache differs"
        );
    }
}
