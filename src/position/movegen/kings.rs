use super::super::{Color, MoveList, Piece, Position, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Position {
    /// The eight adjacent squares. Check safety is the legality filter's
    /// job, not this one's.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (dr, dc) in KING_OFFSETS {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some((target_color, _)) if target_color == color => {}
                _ => moves.push(self.create_move(from, to, false, false)),
            }
        }
    }

    /// Castling candidates for `color`, appended to `moves`.
    ///
    /// Requires the right to still be held, the squares between king and
    /// rook empty, the rook on its home square, and neither the king's
    /// current square nor the square it traverses attacked. The landing
    /// square is covered by the apply-and-probe filter like any other
    /// destination.
    pub(crate) fn generate_castle_moves(&self, color: Color, moves: &mut MoveList) {
        let row = color.back_rank();
        let king_sq = Square(row, 4);
        if self.piece_at(king_sq) != Some((color, Piece::King)) {
            return;
        }

        let opponent = color.opponent();
        if self.square_attacked_by(king_sq, opponent) {
            return;
        }

        if self.castling_rights.has(color, true)
            && self.board.is_empty(Square(row, 5))
            && self.board.is_empty(Square(row, 6))
            && self.piece_at(Square(row, 7)) == Some((color, Piece::Rook))
            && !self.square_attacked_by(Square(row, 5), opponent)
        {
            moves.push(self.create_move(king_sq, Square(row, 6), true, false));
        }

        if self.castling_rights.has(color, false)
            && self.board.is_empty(Square(row, 1))
            && self.board.is_empty(Square(row, 2))
            && self.board.is_empty(Square(row, 3))
            && self.piece_at(Square(row, 0)) == Some((color, Piece::Rook))
            && !self.square_attacked_by(Square(row, 3), opponent)
        {
            moves.push(self.create_move(king_sq, Square(row, 2), true, false));
        }
    }
}
