//! Fluent builder for constructing chess positions.
//!
//! Allows setting up arbitrary positions piece by piece for hosts and
//! tests.
//!
//! # Example
//! ```
//! use caissa::position::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Board, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing [`Position`] values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a [`CastlingRights`] value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the position.
    ///
    /// The piece set must include exactly one king per side; every other
    /// arrangement is outside the engine's contract.
    #[must_use]
    pub fn build(self) -> Position {
        let mut board = Board::empty();
        for (square, color, piece) in &self.pieces {
            board.set_piece(*square, *color, *piece);
        }

        let king_of = |color: Color| {
            self.pieces
                .iter()
                .find(|(_, c, p)| *c == color && *p == Piece::King)
                .map(|(sq, _, _)| *sq)
                .expect("position must contain a king of each color")
        };
        let king_squares = [king_of(Color::White), king_of(Color::Black)];

        Position {
            board,
            white_to_move: self.side_to_move == Color::White,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            king_squares,
            move_log: Vec::new(),
            castling_log: vec![self.castling_rights],
            en_passant_log: vec![self.en_passant_target],
            checkmate: false,
            stalemate: false,
        }
    }
}
