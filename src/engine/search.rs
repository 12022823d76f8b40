/*
  Gambit, a chess engine core.
  Copyright (C) 2026 Gambit Contributors.

  Gambit is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Gambit is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Iterative-deepening negamax with alpha-beta pruning, a transposition
//! table, quiescence search, and MVV-LVA/hash-move ordering.
//!
//! Every score returned by this module is side-to-move relative: a child
//! node's score is negated before being used as its parent's, which is what
//! lets a single recursive function serve both sides without a `match` on
//! color anywhere in the hot path.

use std::cmp::min;

use crate::base::movegen::{has_moves, legal_captures, legal_moves};
use crate::base::{Move, Position};

use super::eval::Eval;
use super::evaluate::evaluate;
use super::limit::SearchLimit;
use super::pick::MovePicker;
use super::time;
use super::transposition::{BoundType, TTEntry, TTable, DEPTH_QUIESCENCE};

/// How often, in nodes, the searcher re-checks the wall clock and stop flag.
const NODE_CHECK_INTERVAL: u64 = 2048;

/// The iterative-deepening starting depth, absent a shallower depth cap.
const START_DEPTH: u8 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A snapshot of the search's best known result, refreshed at the end of
/// every root move and every completed iterative-deepening depth.
pub struct SearchInfo {
    /// The best move found, or `Move::NULL` if no root move has completed
    /// yet (only possible if the position itself has no legal moves).
    pub best_move: Move,
    /// The principal variation starting with `best_move`.
    pub pv: Vec<Move>,
    /// The score of `best_move`, from the side to move's perspective.
    pub score: Eval,
    /// The depth this result was found at.
    pub depth: u8,
    /// Total nodes searched (including quiescence) across the whole search.
    pub nodes: u64,
}

impl Default for SearchInfo {
    fn default() -> SearchInfo {
        SearchInfo {
            best_move: Move::NULL,
            pv: Vec::new(),
            score: Eval::DRAW,
            depth: 0,
            nodes: 0,
        }
    }
}

#[must_use]
/// Search `pos` under `limit`, using `ttable` for transpositions.
///
/// Returns the best result found. If `limit` expires before the first root
/// move at the starting depth finishes, `best_move` is `Move::NULL`; the
/// caller is expected to have already checked that `pos` is not terminal.
///
/// # Panics
/// Panics if `pos` has no legal moves; callers must check game-over status
/// themselves (see the crate-level error taxonomy for "search never reports
/// 'no move available'").
pub fn search(pos: &mut Position, ttable: &mut TTable, limit: &SearchLimit) -> SearchInfo {
    assert!(has_moves(pos), "search called on a terminal position");
    limit.start();

    let depth_cap = *limit.depth_cap.read().unwrap();
    let mut depth = depth_cap.map_or(START_DEPTH, |cap| min(cap, START_DEPTH));
    let mut info = SearchInfo::default();

    loop {
        if limit.depth_exhausted(depth) {
            break;
        }
        let (score, best_move, pv) = search_root(pos, ttable, limit, depth);
        if best_move != Move::NULL {
            info = SearchInfo {
                best_move,
                pv,
                score,
                depth,
                nodes: limit.num_nodes(),
            };
            tracing::info!(
                depth,
                nodes = info.nodes,
                score = score.centipawn_value(),
                pv_len = info.pv.len(),
                "iterative deepening depth complete"
            );
        }
        if limit.is_over() || info.score.is_mate() {
            break;
        }
        if let Some(budget) = *limit.search_duration.lock().unwrap() {
            if time::should_stop_between_root_moves(limit.elapsed(), budget) {
                break;
            }
        }
        depth += 1;
    }

    info.nodes = limit.num_nodes();
    info
}

/// Search every root move at `depth`, returning the best score/move/PV found
/// so far even if `limit` expired partway through (the first completed root
/// move's result is never lost).
fn search_root(
    pos: &mut Position,
    ttable: &mut TTable,
    limit: &SearchLimit,
    depth: u8,
) -> (Eval, Move, Vec<Move>) {
    let moves = legal_moves(pos);
    let hash_move = ttable
        .probe(pos.hash)
        .map(|e| e.best_move)
        .filter(|&m| m != Move::NULL);

    let mut alpha = Eval::NEG_INFTY;
    let beta = Eval::POS_INFTY;
    let mut best_move = Move::NULL;

    for mv in MovePicker::new(pos, moves, hash_move) {
        pos.make(mv);
        let score = if depth == 0 {
            -quiescence(pos, ttable, limit, -beta, -alpha)
        } else {
            -negamax(pos, ttable, limit, depth - 1, -beta, -alpha)
        };
        pos.unmake(mv);

        if score > alpha {
            alpha = score;
            best_move = mv;
        }
        if limit.is_over() {
            break;
        }
        if let Some(budget) = *limit.search_duration.lock().unwrap() {
            if time::should_stop_between_root_moves(limit.elapsed(), budget) {
                break;
            }
        }
    }

    if best_move != Move::NULL {
        ttable.store(TTEntry {
            key: pos.hash,
            depth: depth as i8,
            best_move,
            value: alpha,
            bound: BoundType::Exact,
        });
    }

    let pv = reconstruct_pv(pos, ttable, depth);
    (alpha, best_move, pv)
}

/// If `pos` is a draw or has no legal moves, the score that terminates the
/// search at this node; otherwise `None`.
fn terminal_score(pos: &Position, any_move_exists: bool) -> Option<Eval> {
    if pos.is_fifty_move_draw() || pos.is_threefold_repetition() {
        return Some(Eval::DRAW);
    }
    if !any_move_exists {
        return Some(if pos.is_checking() {
            Eval::mated_at(pos.halfmove_clock)
        } else {
            Eval::DRAW
        });
    }
    None
}

/// Outcome of consulting the transposition table before searching a node.
enum Probe {
    /// The table alone settles this node's score.
    Cutoff(Eval),
    /// Search must continue, with `beta` possibly tightened and a hash move
    /// to try first, if any.
    Continue { beta: Eval, hash_move: Option<Move> },
}

fn probe_tt(ttable: &TTable, key: u64, depth: i8, beta: Eval) -> Probe {
    let mut beta = beta;
    let mut hash_move = None;
    if let Some(entry) = ttable.probe(key) {
        if entry.best_move != Move::NULL {
            hash_move = Some(entry.best_move);
        }
        if entry.depth >= depth {
            match entry.bound {
                BoundType::Exact => return Probe::Cutoff(entry.value),
                BoundType::Lower if entry.value >= beta => return Probe::Cutoff(beta),
                BoundType::Upper => beta = beta.min(entry.value),
                BoundType::Lower => {}
            }
        }
    }
    Probe::Continue { beta, hash_move }
}

fn node_budget_exhausted(limit: &SearchLimit) -> bool {
    if limit.num_nodes() % NODE_CHECK_INTERVAL == 0 {
        limit.update_time();
    }
    limit.is_over()
}

/// The main negamax alpha-beta node procedure, searching `depth` plies
/// further. `depth == 0` hands off to [`quiescence`].
fn negamax(
    pos: &mut Position,
    ttable: &mut TTable,
    limit: &SearchLimit,
    depth: u8,
    alpha: Eval,
    beta: Eval,
) -> Eval {
    limit.add_nodes(1);
    if node_budget_exhausted(limit) {
        return alpha;
    }

    let moves = legal_moves(pos);
    if let Some(score) = terminal_score(pos, !moves.is_empty()) {
        return score;
    }

    let key = pos.hash;
    let (mut beta, hash_move) = match probe_tt(ttable, key, depth as i8, beta) {
        Probe::Cutoff(score) => return score,
        Probe::Continue { beta, hash_move } => (beta, hash_move),
    };
    let mut alpha = alpha;
    if alpha >= beta {
        return alpha;
    }

    if depth == 0 {
        return quiescence(pos, ttable, limit, alpha, beta);
    }

    let mut best_move = Move::NULL;
    let mut bound = BoundType::Upper;

    for mv in MovePicker::new(pos, moves, hash_move) {
        pos.make(mv);
        let score = -negamax(pos, ttable, limit, depth - 1, -beta, -alpha);
        pos.unmake(mv);

        if limit.is_over() {
            return alpha;
        }
        if score >= beta {
            ttable.store(TTEntry {
                key,
                depth: depth as i8,
                best_move: mv,
                value: beta,
                bound: BoundType::Lower,
            });
            return beta;
        }
        if score > alpha {
            alpha = score;
            best_move = mv;
            bound = BoundType::Exact;
        }
    }

    ttable.store(TTEntry {
        key,
        depth: depth as i8,
        best_move,
        value: alpha,
        bound,
    });
    alpha
}

/// The quiescence search: exhausts captures from a leaf position before
/// trusting its static evaluation, avoiding the horizon effect of stopping
/// mid-exchange.
fn quiescence(pos: &mut Position, ttable: &mut TTable, limit: &SearchLimit, alpha: Eval, beta: Eval) -> Eval {
    limit.add_nodes(1);
    if node_budget_exhausted(limit) {
        return alpha;
    }

    if let Some(score) = terminal_score(pos, has_moves(pos)) {
        return score;
    }

    let key = pos.hash;
    let (mut beta, hash_move) = match probe_tt(ttable, key, DEPTH_QUIESCENCE, beta) {
        Probe::Cutoff(score) => return score,
        Probe::Continue { beta, hash_move } => (beta, hash_move),
    };
    let mut alpha = alpha;

    let stand_pat = evaluate(pos);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut best_move = Move::NULL;
    let mut bound = BoundType::Upper;

    for mv in MovePicker::new(pos, legal_captures(pos), hash_move) {
        pos.make(mv);
        let score = -quiescence(pos, ttable, limit, -beta, -alpha);
        pos.unmake(mv);

        if limit.is_over() {
            return alpha;
        }
        if score >= beta {
            ttable.store(TTEntry {
                key,
                depth: DEPTH_QUIESCENCE,
                best_move: mv,
                value: beta,
                bound: BoundType::Lower,
            });
            return beta;
        }
        if score > alpha {
            alpha = score;
            best_move = mv;
            bound = BoundType::Exact;
        }
    }

    ttable.store(TTEntry {
        key,
        depth: DEPTH_QUIESCENCE,
        best_move,
        value: alpha,
        bound,
    });
    alpha
}

/// Follow hash moves from the root to build the principal variation,
/// stopping at a missing entry, a `NULL` move, a drawn position, or a move
/// that turns out not to be legal.
fn reconstruct_pv(pos: &mut Position, ttable: &TTable, max_len: u8) -> Vec<Move> {
    let mut pv = Vec::new();
    while (pv.len() as u8) < max_len {
        if pos.is_fifty_move_draw() || pos.is_threefold_repetition() {
            break;
        }
        let Some(entry) = ttable.probe(pos.hash) else {
            break;
        };
        let mv = entry.best_move;
        if mv == Move::NULL || !legal_moves(pos).contains(&mv) {
            break;
        }
        pos.make(mv);
        pv.push(mv);
    }
    for &mv in pv.iter().rev() {
        pos.unmake(mv);
    }
    pv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_fen(fen: &str, depth: u8) -> SearchInfo {
        let mut pos = Position::from_fen(fen).unwrap();
        let mut ttable = TTable::new();
        let limit = SearchLimit::depth(depth);
        search(&mut pos, &mut ttable, &limit)
    }

    #[test]
    fn finds_mate_in_one() {
        let info = search_fen(
            "rnbqkbnr/pppppppp/8/7B/8/5R2/PPPPPPPP/RNB1K1NQ w Qkq - 0 1",
            1,
        );
        assert_eq!(info.best_move.to_string(), "h5f7");
        assert!(info.score.is_mate());
    }

    #[test]
    fn finds_a_free_queen_capture() {
        let info = search_fen(
            "rnb1kbnr/pppppppp/8/3q4/8/4N3/PPPPPPPP/RNBQKB1R w KQkq - 0 1",
            3,
        );
        assert_eq!(info.best_move.to_string(), "e3d5");
    }

    #[test]
    fn depth_zero_search_does_not_underflow() {
        // A `go depth 0` request must evaluate root moves via quiescence
        // rather than underflow `depth - 1` on a `u8`.
        let info = search_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 0);
        assert_ne!(info.best_move, Move::NULL);
    }

    #[test]
    fn a_position_with_no_captures_or_checks_does_not_crash_quiescence() {
        let info = search_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1", 2);
        // Two bare kings: every move is quiet, nothing for quiescence to do.
        assert_ne!(info.best_move, Move::NULL);
    }

    #[test]
    fn fifty_move_position_evaluates_to_a_draw_score() {
        let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        pos.halfmove_clock = 100;
        let mut ttable = TTable::new();
        let limit = SearchLimit::depth(1);
        let info = search(&mut pos, &mut ttable, &limit);
        assert_eq!(info.score, Eval::DRAW);
    }
}
