use super::super::{Color, MoveList, Position, Square};

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Position {
    /// Walk each ray outward: empty squares extend the ray, an enemy piece
    /// is captured and stops it, an allied piece or the board edge stops
    /// it without a move.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.piece_at(to) {
                    None => {
                        moves.push(self.create_move(from, to, false, false));
                        current = to;
                    }
                    Some((target_color, _)) => {
                        if target_color != color {
                            moves.push(self.create_move(from, to, false, false));
                        }
                        break;
                    }
                }
            }
        }
    }
}
