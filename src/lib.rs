pub mod position;

pub use position::{
    random_move, select_best_move, Board, CastlingRights, Color, Move, MoveList, Piece, Position,
    PositionBuilder, Square, CHECKMATE_SCORE, DEFAULT_SEARCH_DEPTH, STALEMATE_SCORE,
};
