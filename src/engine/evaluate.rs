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

//! Tapered piece-square-table evaluation.
//!
//! Two tables per piece (midgame and endgame), each already folding in the
//! piece's base material value, are blended by a game-phase counter that
//! decays from 24 (full material) to 0 (bare-bones endgame) as pieces come
//! off the board. The result is always from the side-to-move's perspective.

use crate::base::{Color, Piece, Position, Square};

use super::eval::Eval;
use super::pst::{EG_TABLE, MG_TABLE};

/// Per-piece-type weight toward the game-phase counter. Kings and pawns
/// contribute nothing; the starting position's total (both sides) is 24.
const fn phase_weight(p: Piece) -> i32 {
    match p {
        Piece::Knight | Piece::Bishop => 1,
        Piece::Rook => 2,
        Piece::Queen => 4,
        Piece::Pawn | Piece::King => 0,
    }
}

fn table_value(table: &[[i32; 64]; Piece::NUM], pc: Piece, sq: Square, color: Color) -> i32 {
    let idx = match color {
        Color::White => sq as usize,
        Color::Black => sq.opposite() as usize,
    };
    let v = table[pc as usize][idx];
    match color {
        Color::White => v,
        Color::Black => -v,
    }
}

#[must_use]
/// The game phase, in `[0, 24]`: 24 at full material, decaying toward 0 as
/// major and minor pieces are traded off.
pub fn game_phase(pos: &Position) -> i32 {
    let mut phase = 0;
    for color in Color::ALL {
        for piece in Piece::ALL {
            let weight = phase_weight(piece);
            if weight == 0 {
                continue;
            }
            phase += weight * pos.pieces(color, piece).count_ones() as i32;
        }
    }
    phase.min(24)
}

/// Sum of midgame and endgame table values over every piece on the board,
/// signed so White's pieces add positively and Black's subtract (i.e. this
/// is always White-relative; the caller flips perspective as needed).
fn tapered_sums(pos: &Position) -> (i32, i32) {
    let mut mg = 0;
    let mut eg = 0;
    for sq in Square::ALL {
        if let Some((pc, color)) = pos.piece_at(sq) {
            mg += table_value(&MG_TABLE, pc, sq, color);
            eg += table_value(&EG_TABLE, pc, sq, color);
        }
    }
    (mg, eg)
}

#[must_use]
/// Evaluate `pos` from the side-to-move's perspective: positive is good for
/// whoever is about to move.
pub fn evaluate(pos: &Position) -> Eval {
    let phase = game_phase(pos);
    let (mg_sum, eg_sum) = tapered_sums(pos);
    let white_relative_millipawns = (mg_sum * phase + eg_sum * (24 - phase)) / 24;
    let white_relative = white_relative_millipawns / 10;
    let score = Eval::centipawns(white_relative);
    match pos.side_to_move {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        let pos = Position::new();
        assert_eq!(evaluate(&pos), Eval::DRAW);
    }

    #[test]
    fn starting_phase_is_full() {
        let pos = Position::new();
        assert_eq!(game_phase(&pos), 24);
    }

    #[test]
    fn bare_kings_phase_is_zero() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(game_phase(&pos), 0);
    }

    #[test]
    fn being_a_queen_up_is_a_large_positive_score_for_the_side_with_it() {
        let with_extra_queen =
            Position::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").unwrap();
        assert!(evaluate(&with_extra_queen) > Eval::centipawns(500));
    }

    #[test]
    fn evaluation_is_symmetric_under_color_flip() {
        let white_up = Position::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").unwrap();
        let black_up = Position::from_fen("4k3/8/8/3q4/8/8/8/4K3 b - - 0 1").unwrap();
        assert_eq!(
            evaluate(&white_up).centipawn_value(),
            evaluate(&black_up).centipawn_value()
        );
    }
}
