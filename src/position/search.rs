//! Fixed-depth negamax move selection with alpha-beta pruning.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use super::eval::CHECKMATE_SCORE;
use super::{Move, MoveList, Position};

/// Default search depth in plies.
pub const DEFAULT_SEARCH_DEPTH: u32 = 2;

/// Strictly below every achievable score, so the first examined move at
/// any node always becomes the running best.
const INFINITY: i32 = CHECKMATE_SCORE + 1;

/// Scratch state threaded through the recursion. Never global: the root
/// depth identifies where the chosen move is recorded, and the node
/// counter feeds the completion log line.
struct SearchContext {
    root_depth: u32,
    best_move: Option<Move>,
    nodes: u64,
}

/// Pick the minimax-optimal move for the side to move.
///
/// The legal list is shuffled first so equal-scoring moves vary between
/// calls, then searched to `depth` plies with alpha-beta pruning. Pruning
/// only skips nodes; the returned move's value always equals the
/// exhaustive negamax value at the same depth. Returns `None` when
/// `moves` is empty; with a non-empty list a move is always found, but
/// callers may still guard with [`random_move`] as a defensive fallback.
pub fn select_best_move(
    position: &mut Position,
    moves: &MoveList,
    depth: u32,
    rng: &mut impl Rng,
) -> Option<Move> {
    let mut shuffled = moves.clone();
    shuffled.as_mut_slice().shuffle(rng);

    let mut ctx = SearchContext {
        root_depth: depth,
        best_move: None,
        nodes: 0,
    };
    let turn = if position.white_to_move() { 1 } else { -1 };
    let score = negamax(
        position,
        &shuffled,
        depth,
        -CHECKMATE_SCORE,
        CHECKMATE_SCORE,
        turn,
        &mut ctx,
    );

    debug!(
        "search depth {} visited {} nodes, score {}, best {}",
        depth,
        ctx.nodes,
        score,
        ctx.best_move.map_or_else(|| "-".to_string(), |m| m.notation()),
    );

    ctx.best_move
}

/// Pick a uniformly random legal move. Fallback policy for the (provably
/// unreachable with a non-empty list) case where search yields nothing.
pub fn random_move(moves: &MoveList, rng: &mut impl Rng) -> Option<Move> {
    moves.as_slice().choose(rng).copied()
}

/// Negamax over the legal move list, from the perspective of the side to
/// move at this node (`turn` is +1 for white, -1 for black).
///
/// Leaves and terminal nodes score through the evaluator; its terminal
/// handling relies on the flags set by the `valid_moves` call that
/// produced `moves` for this node.
fn negamax(
    position: &mut Position,
    moves: &MoveList,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    turn: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 || moves.is_empty() {
        return turn * position.score_board();
    }

    let mut max_score = -INFINITY;
    for m in moves.iter() {
        position.apply_move(*m);
        let replies = position.valid_moves();
        let score = -negamax(position, &replies, depth - 1, -beta, -alpha, -turn, ctx);
        position.undo_move();

        if depth == ctx.root_depth {
            trace!("root candidate {} scores {}", m.notation(), score);
        }

        if score > max_score {
            max_score = score;
            if depth == ctx.root_depth {
                ctx.best_move = Some(*m);
            }
        }

        if max_score > alpha {
            alpha = max_score;
        }
        if alpha >= beta {
            break;
        }
    }

    max_score
}
