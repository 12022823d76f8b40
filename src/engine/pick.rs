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

//! Move ordering.
//!
//! Alpha-beta pruning's effectiveness hinges on searching the best move
//! first at each node, so every legal move is scored once and then handed
//! out best-first by [`MovePicker`]. The picker does a selection-sort step
//! per call rather than sorting the whole list up front: a beta cutoff
//! partway through the move list means the tail is never scored for
//! ordering purposes at all.

use crate::base::{Move, Piece, Position};

/// A move's rank among piece types for MVV-LVA purposes: higher is more
/// valuable. Distinct from [`Piece::value`]'s centipawn scale; only the
/// relative order matters here.
fn piece_rank(p: Piece) -> i32 {
    match p {
        Piece::Pawn => 1,
        Piece::Knight => 2,
        Piece::Bishop => 3,
        Piece::Rook => 4,
        Piece::Queen => 5,
        Piece::King => 6,
    }
}

/// Score reserved for the hash move, unconditionally searched first.
const HASH_MOVE_SCORE: i32 = i32::MAX;
/// Base score for promotions, scored by the promoted-to piece's value;
/// placed above captures since a promotion is rarely bad to investigate
/// first.
const PROMOTION_BASE_SCORE: i32 = 100_000;
/// Base score for captures, scored by MVV-LVA.
const CAPTURE_BASE_SCORE: i32 = 50_000;

/// Score a single legal move for ordering purposes.
fn score_move(pos: &Position, mv: Move, hash_move: Option<Move>) -> i32 {
    if hash_move == Some(mv) {
        return HASH_MOVE_SCORE;
    }
    if mv.is_promotion() {
        let promoted = mv.promote_type().expect("is_promotion() implies promote_type()");
        return PROMOTION_BASE_SCORE + i32::from(promoted.value());
    }
    let victim = if mv.is_en_passant() {
        Some(Piece::Pawn)
    } else {
        pos.piece_at(mv.to_square()).map(|(pc, _)| pc)
    };
    if let Some(victim) = victim {
        let attacker = pos
            .piece_at(mv.from_square())
            .map_or(Piece::Pawn, |(pc, _)| pc);
        let mvv_lva = 10 * piece_rank(victim) + (5 - piece_rank(attacker));
        return CAPTURE_BASE_SCORE + mvv_lva;
    }
    0
}

/// Yields legal moves best-first: the hash move (if legal and present),
/// then captures and promotions by descending score, then the rest in
/// generation order.
pub struct MovePicker {
    scored: Vec<(Move, i32)>,
    next: usize,
}

impl MovePicker {
    #[must_use]
    pub fn new(pos: &Position, moves: Vec<Move>, hash_move: Option<Move>) -> MovePicker {
        let scored = moves
            .into_iter()
            .map(|mv| (mv, score_move(pos, mv, hash_move)))
            .collect();
        MovePicker { scored, next: 0 }
    }
}

impl Iterator for MovePicker {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.next >= self.scored.len() {
            return None;
        }
        let mut best = self.next;
        for i in (self.next + 1)..self.scored.len() {
            if self.scored[i].1 > self.scored[best].1 {
                best = i;
            }
        }
        self.scored.swap(self.next, best);
        let (mv, _) = self.scored[self.next];
        self.next += 1;
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{movegen::legal_moves, Square};

    #[test]
    fn hash_move_comes_first() {
        let pos = Position::new();
        let moves = legal_moves(&pos);
        let hash_move = Move::normal(Square::G1, Square::F3);
        assert!(moves.contains(&hash_move));
        let ordered: Vec<Move> = MovePicker::new(&pos, moves, Some(hash_move)).collect();
        assert_eq!(ordered[0], hash_move);
    }

    #[test]
    fn captures_are_ordered_by_mvv_lva() {
        // Black queen on d5 can be captured by either the pawn on c4 or the
        // knight on e3; the lower-value attacker (the pawn) should sort first.
        let pos = Position::from_fen("4k3/8/8/3q4/2P5/4N3/8/4K3 w - - 0 1").unwrap();
        let moves = legal_moves(&pos);
        let ordered: Vec<Move> = MovePicker::new(&pos, moves, None).collect();
        let pawn_capture = Move::normal(Square::C4, Square::D5);
        let knight_capture = Move::normal(Square::E3, Square::D5);
        let pawn_pos = ordered.iter().position(|&m| m == pawn_capture).unwrap();
        let knight_pos = ordered.iter().position(|&m| m == knight_capture).unwrap();
        assert!(pawn_pos < knight_pos);
    }

    #[test]
    fn promotions_outrank_ordinary_captures() {
        let pos = Position::from_fen("1r2k3/2P5/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let moves = legal_moves(&pos);
        let ordered: Vec<Move> = MovePicker::new(&pos, moves, None).collect();
        assert!(ordered[0].is_promotion());
    }
}
