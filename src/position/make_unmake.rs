use super::{Color, Move, Piece, Position, Square};

impl Position {
    /// Apply a move in place.
    ///
    /// The move must come from this position's legal move list (or be a
    /// pseudo-legal candidate under probe, immediately undone). Pawns
    /// reaching the far rank always promote to a queen. Every call must be
    /// matched by exactly one later [`Position::undo_move`].
    pub fn apply_move(&mut self, m: Move) {
        let color = self.current_color();

        self.board.clear_square(m.from);
        if m.is_en_passant {
            // The captured pawn sits beside the origin, not on the
            // destination square.
            self.board.clear_square(Square(m.from.0, m.to.1));
        }
        let placed = if m.is_promotion { Piece::Queen } else { m.piece };
        self.board.set_piece(m.to, color, placed);

        if m.piece == Piece::King {
            self.king_squares[color.index()] = m.to;
        }

        if m.is_castling {
            let (rook_from_c, rook_to_c) = if m.to.1 == 6 { (7, 5) } else { (0, 3) };
            self.board.clear_square(Square(m.to.0, rook_from_c));
            self.board.set_piece(Square(m.to.0, rook_to_c), color, Piece::Rook);
        }

        // New en passant target: the skipped square of a double advance.
        self.en_passant_target = if m.piece == Piece::Pawn
            && (m.from.0 as isize - m.to.0 as isize).abs() == 2
        {
            Some(Square(usize::midpoint(m.from.0, m.to.0), m.from.1))
        } else {
            None
        };

        self.revoke_castling_rights(&m, color);

        self.move_log.push(m);
        self.castling_log.push(self.castling_rights);
        self.en_passant_log.push(self.en_passant_target);

        self.white_to_move = !self.white_to_move;
    }

    /// Undo the most recently applied move. No-op if the history is empty.
    ///
    /// Restores board contents, side to move, castling rights, en passant
    /// target and the king cache exactly, and clears the terminal flags
    /// (they must be recomputed, never trusted across an undo).
    pub fn undo_move(&mut self) {
        let Some(m) = self.move_log.pop() else {
            return;
        };

        self.castling_log.pop();
        self.en_passant_log.pop();
        self.castling_rights = *self
            .castling_log
            .last()
            .expect("castling log lost its seed entry");
        self.en_passant_target = *self
            .en_passant_log
            .last()
            .expect("en passant log lost its seed entry");

        self.white_to_move = !self.white_to_move;
        let color = self.current_color();
        let opponent = color.opponent();

        self.board.set_piece(m.from, color, m.piece);
        if m.is_en_passant {
            self.board.clear_square(m.to);
            self.board
                .set_piece(Square(m.from.0, m.to.1), opponent, Piece::Pawn);
        } else if let Some(captured) = m.captured {
            self.board.set_piece(m.to, opponent, captured);
        } else {
            self.board.clear_square(m.to);
        }

        if m.piece == Piece::King {
            self.king_squares[color.index()] = m.from;
        }

        if m.is_castling {
            let (rook_from_c, rook_to_c) = if m.to.1 == 6 { (7, 5) } else { (0, 3) };
            self.board.clear_square(Square(m.to.0, rook_to_c));
            self.board
                .set_piece(Square(m.to.0, rook_from_c), color, Piece::Rook);
        }

        self.checkmate = false;
        self.stalemate = false;
    }

    /// Rights go held -> revoked only; undo restores them from the log.
    fn revoke_castling_rights(&mut self, m: &Move, color: Color) {
        match m.piece {
            Piece::King => self.castling_rights.remove_both(color),
            Piece::Rook => {
                let home = color.back_rank();
                if m.from == Square(home, 0) {
                    self.castling_rights.remove(color, false);
                } else if m.from == Square(home, 7) {
                    self.castling_rights.remove(color, true);
                }
            }
            _ => {}
        }

        if m.captured == Some(Piece::Rook) {
            let opponent = color.opponent();
            let home = opponent.back_rank();
            if m.to == Square(home, 0) {
                self.castling_rights.remove(opponent, false);
            } else if m.to == Square(home, 7) {
                self.castling_rights.remove(opponent, true);
            }
        }
    }
}
