mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Build a move from this position, capturing piece identities at
    /// construction time. The promotion flag is derived: a pawn arriving
    /// on its far rank always promotes (to a queen, on apply).
    pub(crate) fn create_move(
        &self,
        from: Square,
        to: Square,
        is_castling: bool,
        is_en_passant: bool,
    ) -> Move {
        let (color, piece) = self
            .piece_at(from)
            .expect("move created from an empty square");

        let captured = if is_en_passant {
            Some(Piece::Pawn)
        } else if !is_castling {
            self.piece_at(to).map(|(_, p)| p)
        } else {
            None
        };

        Move {
            from,
            to,
            piece,
            captured,
            is_promotion: piece == Piece::Pawn && to.0 == color.promotion_row(),
            is_en_passant,
            is_castling,
        }
    }

    /// Every move satisfying piece geometry and occupancy for `color`,
    /// ignoring whether the mover's own king is left attacked. Castling is
    /// not produced here; the legality layer adds it separately.
    pub(crate) fn generate_pseudo_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..8 {
            for col in 0..8 {
                let from = Square(row, col);
                let Some((piece_color, piece)) = self.piece_at(from) else {
                    continue;
                };
                if piece_color != color {
                    continue;
                }
                match piece {
                    Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                    Piece::Knight => self.generate_knight_moves(from, color, &mut moves),
                    Piece::Bishop => {
                        self.generate_sliding_moves(from, color, &sliders::BISHOP_DIRECTIONS, &mut moves);
                    }
                    Piece::Rook => {
                        self.generate_sliding_moves(from, color, &sliders::ROOK_DIRECTIONS, &mut moves);
                    }
                    Piece::Queen => {
                        self.generate_sliding_moves(from, color, &sliders::QUEEN_DIRECTIONS, &mut moves);
                    }
                    Piece::King => self.generate_king_moves(from, color, &mut moves),
                }
            }
        }
        moves
    }

    /// True if any pseudo-legal move of `attacker` lands on `square`.
    ///
    /// Takes the attacker color explicitly; nothing here touches the side
    /// to move.
    #[must_use]
    pub fn square_attacked_by(&self, square: Square, attacker: Color) -> bool {
        self.generate_pseudo_moves(attacker)
            .iter()
            .any(|m| m.to == square)
    }

    /// True if the side to move's king is attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        let color = self.current_color();
        self.square_attacked_by(self.king_square(color), color.opponent())
    }

    /// All legal moves for the side to move.
    ///
    /// Generates pseudo-legal candidates plus castling, then keeps each
    /// one only if applying it leaves the mover's own king unattacked.
    /// Sets the checkmate/stalemate flags: an empty result means mate when
    /// the side to move is in check, stalemate otherwise.
    pub fn valid_moves(&mut self) -> MoveList {
        let color = self.current_color();
        let saved_rights = self.castling_rights;
        let saved_ep = self.en_passant_target;

        let candidates = {
            let mut candidates = self.generate_pseudo_moves(color);
            self.generate_castle_moves(color, &mut candidates);
            candidates
        };

        let mut legal = MoveList::new();
        for m in candidates.iter() {
            self.apply_move(*m);
            let safe = !self.square_attacked_by(self.king_square(color), color.opponent());
            self.undo_move();
            if safe {
                legal.push(*m);
            }
        }

        if legal.is_empty() {
            if self.in_check() {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }

        // Probing is apply/undo paired, so nothing may have leaked.
        debug_assert_eq!(self.castling_rights, saved_rights);
        debug_assert_eq!(self.en_passant_target, saved_ep);

        legal
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            self.apply_move(*m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
