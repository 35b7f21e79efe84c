use super::super::{Color, MoveList, Position, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (dr, dc) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(to) {
                Some((target_color, _)) if target_color == color => {}
                _ => moves.push(self.create_move(from, to, false, false)),
            }
        }
    }
}
