use super::super::{Color, MoveList, Position, Square};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.board.is_empty(forward) {
                moves.push(self.create_move(from, forward, false, false));
                // Double advance needs both intervening and destination
                // squares empty, from the home row only.
                if from.0 == color.pawn_start_row() {
                    let double = Square((from.0 as isize + 2 * dir) as usize, from.1);
                    if self.board.is_empty(double) {
                        moves.push(self.create_move(from, double, false, false));
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            if let Some((target_color, _)) = self.piece_at(target) {
                if target_color != color {
                    moves.push(self.create_move(from, target, false, false));
                }
            } else if Some(target) == self.en_passant_target {
                moves.push(self.create_move(from, target, false, true));
            }
        }
    }
}
