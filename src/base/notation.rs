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

//! Standard Algebraic Notation, for human-facing move logs. UCI strings
//! remain the wire format; this is read-only output, so there is no
//! `from_san`.

use super::movegen::{has_moves, legal_moves};
use super::{Move, Piece, Position, Square};

#[must_use]
/// Render `mv`, played in `pos`, as SAN. `mv` must be legal in `pos`.
pub fn to_san(pos: &Position, mv: Move) -> String {
    let mut san = if mv.is_castle() {
        castle_san(mv)
    } else {
        normal_san(pos, mv)
    };
    append_check_suffix(pos, mv, &mut san);
    san
}

fn castle_san(mv: Move) -> String {
    if mv.to_square().file() == 6 {
        "O-O".to_string()
    } else {
        "O-O-O".to_string()
    }
}

fn normal_san(pos: &Position, mv: Move) -> String {
    let (piece, _) = pos
        .piece_at(mv.from_square())
        .expect("a legal move's source square holds a piece");
    let is_capture = mv.is_en_passant() || pos.piece_at(mv.to_square()).is_some();

    let mut san = String::new();
    if piece == Piece::Pawn {
        if is_capture {
            san.push(file_char(mv.from_square()));
        }
    } else {
        san.push(piece.code());
        san.push_str(&disambiguator(pos, mv, piece));
    }
    if is_capture {
        san.push('x');
    }
    san.push_str(&mv.to_square().to_string());
    if let Some(promote) = mv.promote_type() {
        san.push('=');
        san.push(promote.code());
    }
    san
}

fn file_char(sq: Square) -> char {
    (b'a' + sq.file()) as char
}

/// The minimal file/rank/full-square prefix needed to distinguish `mv` from
/// every other legal move of the same piece type to the same destination.
fn disambiguator(pos: &Position, mv: Move, piece: Piece) -> String {
    let from = mv.from_square();
    let others: Vec<Square> = legal_moves(pos)
        .into_iter()
        .filter(|&m| m != mv && m.to_square() == mv.to_square())
        .filter(|&m| pos.piece_at(m.from_square()).map(|(pc, _)| pc) == Some(piece))
        .map(Move::from_square)
        .collect();

    if others.is_empty() {
        return String::new();
    }
    let same_file = others.iter().any(|&sq| sq.file() == from.file());
    let same_rank = others.iter().any(|&sq| sq.rank() == from.rank());
    if !same_file {
        file_char(from).to_string()
    } else if !same_rank {
        (from.rank() + 1).to_string()
    } else {
        from.to_string()
    }
}

/// Append `+` for check or `#` for checkmate, determined by playing `mv` on
/// a scratch copy of `pos`.
fn append_check_suffix(pos: &Position, mv: Move, san: &mut String) {
    let mut after = pos.clone();
    after.make(mv);
    if after.is_checking() {
        san.push(if has_moves(&after) { '+' } else { '#' });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::movegen::legal_moves;

    fn san_for(fen: &str, uci: &str) -> String {
        let pos = Position::from_fen(fen).unwrap();
        let mv = pos.move_from_uci(uci).unwrap();
        to_san(&pos, mv)
    }

    #[test]
    fn pawn_push_has_no_piece_letter() {
        assert_eq!(
            san_for("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "e2e4"),
            "e4"
        );
    }

    #[test]
    fn pawn_capture_prepends_source_file() {
        assert_eq!(
            san_for("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", "e4d5"),
            "exd5"
        );
    }

    #[test]
    fn knight_move_has_piece_letter_and_no_disambiguation_when_unique() {
        assert_eq!(
            san_for("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", "g1f3"),
            "Nf3"
        );
    }

    #[test]
    fn ambiguous_rook_move_disambiguates_by_file() {
        // Rooks on a4 and h4 can both reach d4 along the open fourth rank.
        let san = san_for("4k3/8/8/8/R6R/8/8/4K3 w - - 0 1", "a4d4");
        assert_eq!(san, "Rad4");
    }

    #[test]
    fn checkmate_gets_a_hash_suffix() {
        assert_eq!(
            san_for("rnbqkbnr/pppppppp/8/7B/8/5R2/PPPPPPPP/RNB1K1NQ w Qkq - 0 1", "h5f7"),
            "Bxf7#"
        );
    }

    #[test]
    fn castling_is_rendered_with_o_o() {
        assert_eq!(san_for("4k3/8/8/8/8/8/8/4K2R w K - 0 1", "e1g1"), "O-O");
    }

    #[test]
    fn every_legal_move_renders_without_panicking() {
        let pos = Position::new();
        for mv in legal_moves(&pos) {
            let _ = to_san(&pos, mv);
        }
    }
}
