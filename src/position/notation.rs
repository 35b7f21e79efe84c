//! Display notation for moves.
//!
//! Two display-only forms: the coordinate pair used by click-to-move
//! interfaces ("e2e4") and a short algebraic form for move logs ("Nf3",
//! "exd5", "O-O"). Neither is parsed back; check/checkmate suffixes and
//! disambiguation between like pieces are intentionally not rendered.

use super::{Move, Piece};

impl Move {
    /// Coordinate notation: origin square then destination square.
    #[must_use]
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Short algebraic display form.
    ///
    /// Piece letter (pawns omit it), "x" on captures with the origin file
    /// for pawn captures, destination square, "=Q" on promotion, and
    /// "O-O"/"O-O-O" for castling.
    #[must_use]
    pub fn san(&self) -> String {
        if self.is_castling {
            return if self.is_castle_kingside() {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let mut san = String::new();

        if self.piece == Piece::Pawn {
            if self.is_capture() {
                san.push((b'a' + self.from.col() as u8) as char);
            }
        } else {
            san.push(self.piece.to_char().to_ascii_uppercase());
        }

        if self.is_capture() {
            san.push('x');
        }

        san.push_str(&self.to.to_string());

        if self.is_promotion {
            san.push_str("=Q");
        }

        san
    }
}
