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

//! Board state: piece placement, make/unmake with an undo stack, and the
//! attack/attacker queries the move generator and evaluator build on.
//!
//! The incremental Zobrist key, per the carried-forward open question in
//! the design notes, XORs in only per-square (square, piece, color)
//! contributions plus a side-to-move constant. Castling rights and the
//! en-passant square do *not* contribute, which means two positions that
//! differ only in those fields can collide in the transposition table;
//! [`zobrist::castle_key`]/[`zobrist::ep_key`] exist for a caller that
//! wants to opt into disambiguating them, but `Position` does not call
//! them.

use super::movegen::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use super::{zobrist, Bitboard, CastleRights, Color, Move, Piece, Square};
use crate::error::{FenError, MoveParseError};
use nohash_hasher::BuildNoHashHasher;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Undo {
    mv: Move,
    /// The piece type that was on the source square before the move (the
    /// pre-promotion type for a promoting move), so `unmake` can restore it
    /// without re-deriving it from the (already-overwritten) board.
    moved: Piece,
    captured: Option<Piece>,
    castle_rights: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u8,
}

#[derive(Debug)]
/// A chess position: piece placement, side to move, rights, and the move
/// history needed to undo moves and detect repetition.
pub struct Position {
    piece_bb: [Bitboard; Piece::NUM],
    color_bb: [Bitboard; 2],
    all_bb: Bitboard,
    mailbox: [Option<(Piece, Color)>; 64],
    king_sqs: [Square; 2],
    pub side_to_move: Color,
    pub castle_rights: CastleRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u8,
    pub fullmove_number: u16,
    pub hash: u64,
    undo_stack: Vec<Undo>,
    repetition: HashMap<u64, u8, BuildNoHashHasher<u64>>,
}

impl Position {
    #[must_use]
    /// The standard chess starting position.
    pub fn new() -> Position {
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("the starting-position FEN is always valid")
    }

    #[must_use]
    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.mailbox[sq as usize]
    }

    #[must_use]
    #[inline(always)]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_sqs[color as usize]
    }

    #[must_use]
    #[inline(always)]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.color_bb[color as usize]
    }

    #[must_use]
    #[inline(always)]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.piece_bb[piece as usize] & self.color_bb[color as usize]
    }

    #[must_use]
    #[inline(always)]
    pub fn piece_occupancy(&self, piece: Piece) -> Bitboard {
        self.piece_bb[piece as usize]
    }

    #[must_use]
    #[inline(always)]
    pub fn all_occupied(&self) -> Bitboard {
        self.all_bb
    }

    #[must_use]
    /// The set of `by_color`'s pieces that attack `sq`.
    pub fn attackers_of(&self, sq: Square, by_color: Color) -> Bitboard {
        let occ = self.all_bb;
        let diag_sliders = self.pieces(by_color, Piece::Bishop) | self.pieces(by_color, Piece::Queen);
        let line_sliders = self.pieces(by_color, Piece::Rook) | self.pieces(by_color, Piece::Queen);
        (pawn_attacks(sq, !by_color) & self.pieces(by_color, Piece::Pawn))
            | (knight_attacks(sq) & self.pieces(by_color, Piece::Knight))
            | (bishop_attacks(sq, occ) & diag_sliders)
            | (rook_attacks(sq, occ) & line_sliders)
            | (king_attacks(sq) & self.pieces(by_color, Piece::King))
    }

    #[must_use]
    /// The union of every attack `color` makes, with the *opposing* king
    /// removed from occupancy first, so that sliding x-rays through the
    /// king are reflected (needed to compute legal king-evasion squares).
    pub fn attack_mask(&self, color: Color) -> Bitboard {
        let occ = self.all_bb & !Bitboard::from_square(self.king_square(!color));
        let mut mask = Bitboard::EMPTY;
        for sq in self.pieces(color, Piece::Pawn) {
            mask |= pawn_attacks(sq, color);
        }
        for sq in self.pieces(color, Piece::Knight) {
            mask |= knight_attacks(sq);
        }
        let diag_sliders = self.pieces(color, Piece::Bishop) | self.pieces(color, Piece::Queen);
        for sq in diag_sliders {
            mask |= bishop_attacks(sq, occ);
        }
        let line_sliders = self.pieces(color, Piece::Rook) | self.pieces(color, Piece::Queen);
        for sq in line_sliders {
            mask |= rook_attacks(sq, occ);
        }
        mask |= king_attacks(self.king_square(color));
        mask
    }

    #[must_use]
    /// Whether the side to move is in check.
    pub fn is_checking(&self) -> bool {
        !self
            .attackers_of(self.king_square(self.side_to_move), !self.side_to_move)
            .is_empty()
    }

    #[must_use]
    /// The number of times the current Zobrist key has occurred so far,
    /// including the current occurrence.
    pub fn repetition_count(&self) -> u8 {
        self.repetition.get(&self.hash).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    fn add_piece(&mut self, sq: Square, pc: Piece, color: Color) {
        let bb = Bitboard::from_square(sq);
        self.piece_bb[pc as usize] |= bb;
        self.color_bb[color as usize] |= bb;
        self.all_bb |= bb;
        self.mailbox[sq as usize] = Some((pc, color));
        if pc == Piece::King {
            self.king_sqs[color as usize] = sq;
        }
        self.hash ^= zobrist::square_key(sq, Some(pc), color);
    }

    fn remove_piece(&mut self, sq: Square) -> Option<(Piece, Color)> {
        let removed = self.mailbox[sq as usize].take()?;
        let (pc, color) = removed;
        let bb = !Bitboard::from_square(sq);
        self.piece_bb[pc as usize] &= bb;
        self.color_bb[color as usize] &= bb;
        self.all_bb &= bb;
        self.hash ^= zobrist::square_key(sq, Some(pc), color);
        Some(removed)
    }

    /// Clear whichever castling right would be invalidated by a piece
    /// arriving at or leaving the four rook corners, or a king moving.
    fn update_castle_rights_for_move(&mut self, from: Square, to: Square, moved: Piece) {
        match moved {
            Piece::King => self.castle_rights &= !CastleRights::of_color(self.side_to_move),
            Piece::Rook => {
                self.clear_right_if_corner(from);
            }
            _ => {}
        }
        self.clear_right_if_corner(to);
    }

    fn clear_right_if_corner(&mut self, sq: Square) {
        let right = match sq {
            Square::H1 => CastleRights::WHITE_KINGSIDE,
            Square::A1 => CastleRights::WHITE_QUEENSIDE,
            Square::H8 => CastleRights::BLACK_KINGSIDE,
            Square::A8 => CastleRights::BLACK_QUEENSIDE,
            _ => return,
        };
        self.castle_rights &= !right;
    }

    /// Apply `mv` to the position, pushing an undo record.
    ///
    /// # Panics
    /// Panics in debug builds if `mv`'s source square is empty: that is an
    /// invariant violation (callers must only make legal moves), not
    /// malformed input.
    pub fn make(&mut self, mv: Move) {
        let from = mv.from_square();
        let to = mv.to_square();
        let (moved_piece, mover_color) = self
            .piece_at(from)
            .expect("make() called with no piece on the source square");
        debug_assert_eq!(mover_color, self.side_to_move);

        let prior_castle_rights = self.castle_rights;
        let prior_en_passant = self.en_passant;
        let prior_halfmove = self.halfmove_clock;
        let mut captured = None;
        let mut reset_halfmove = moved_piece == Piece::Pawn;
        let mut new_en_passant = None;

        if mv.is_castle() {
            self.remove_piece(from);
            self.add_piece(to, Piece::King, mover_color);
            let (rook_from, rook_to) = castle_rook_squares(to);
            self.remove_piece(rook_from);
            self.add_piece(rook_to, Piece::Rook, mover_color);
            self.castle_rights &= !CastleRights::of_color(mover_color);
        } else if mv.is_en_passant() {
            self.remove_piece(from);
            self.add_piece(to, Piece::Pawn, mover_color);
            let captured_sq = Square::new(from.rank(), to.file()).unwrap();
            self.remove_piece(captured_sq);
            captured = Some(Piece::Pawn);
            reset_halfmove = true;
        } else {
            if let Some((cap_pc, _)) = self.remove_piece(to) {
                captured = Some(cap_pc);
                reset_halfmove = true;
                self.clear_right_if_corner(to);
            }
            self.remove_piece(from);
            let placed = mv.promote_type().unwrap_or(moved_piece);
            if mv.is_promotion() {
                reset_halfmove = true;
            }
            self.add_piece(to, placed, mover_color);
            self.update_castle_rights_for_move(from, to, moved_piece);

            if moved_piece == Piece::Pawn {
                let delta = to.rank() as i8 - from.rank() as i8;
                if delta.abs() == 2 {
                    let passed = Square::new(((from.rank() as i8) + delta / 2) as u8, from.file())
                        .unwrap();
                    new_en_passant = Some(passed);
                }
            }
        }

        self.en_passant = new_en_passant;
        self.halfmove_clock = if reset_halfmove { 0 } else { prior_halfmove + 1 };
        if mover_color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = !self.side_to_move;
        self.hash ^= zobrist::BLACK_TO_MOVE_KEY;

        *self.repetition.entry(self.hash).or_insert(0) += 1;
        self.undo_stack.push(Undo {
            mv,
            moved: moved_piece,
            captured,
            castle_rights: prior_castle_rights,
            en_passant: prior_en_passant,
            halfmove_clock: prior_halfmove,
        });
    }

    /// Reverse the most recent [`make`](Self::make) call, which must have
    /// been given `mv`.
    ///
    /// # Panics
    /// Panics if the undo stack is empty or its top move does not match
    /// `mv`: both are invariant violations, not recoverable input errors.
    pub fn unmake(&mut self, mv: Move) {
        let undo = self.undo_stack.pop().expect("unmake() called with an empty undo stack");
        debug_assert_eq!(undo.mv, mv);

        if let Some(count) = self.repetition.get_mut(&self.hash) {
            *count -= 1;
            if *count == 0 {
                self.repetition.remove(&self.hash);
            }
        }

        self.hash ^= zobrist::BLACK_TO_MOVE_KEY;
        self.side_to_move = !self.side_to_move;
        let mover_color = self.side_to_move;
        if mover_color == Color::Black {
            self.fullmove_number -= 1;
        }

        let from = mv.from_square();
        let to = mv.to_square();

        if mv.is_castle() {
            self.remove_piece(to);
            self.add_piece(from, Piece::King, mover_color);
            let (rook_from, rook_to) = castle_rook_squares(to);
            self.remove_piece(rook_to);
            self.add_piece(rook_from, Piece::Rook, mover_color);
        } else if mv.is_en_passant() {
            self.remove_piece(to);
            self.add_piece(from, Piece::Pawn, mover_color);
            let captured_sq = Square::new(from.rank(), to.file()).unwrap();
            self.add_piece(captured_sq, Piece::Pawn, !mover_color);
        } else {
            self.remove_piece(to);
            self.add_piece(from, undo.moved, mover_color);
            if let Some(cap_pc) = undo.captured {
                self.add_piece(to, cap_pc, !mover_color);
            }
        }

        self.castle_rights = undo.castle_rights;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
    }

    #[must_use]
    /// Parse a FEN string.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let mut pos = Position {
            piece_bb: [Bitboard::EMPTY; Piece::NUM],
            color_bb: [Bitboard::EMPTY; 2],
            all_bb: Bitboard::EMPTY,
            mailbox: [None; 64],
            king_sqs: [Square::E1, Square::E1],
            side_to_move: Color::White,
            castle_rights: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            undo_stack: Vec::new(),
            repetition: HashMap::default(),
        };

        let mut fields = fen.split_whitespace();
        let board_field = fields.next().ok_or_else(|| {
            tracing::warn!(fen, "rejected malformed FEN: missing board field");
            FenError::TruncatedBoard
        })?;

        let mut rank = 7i8;
        let mut file = 0u8;
        for c in board_field.chars() {
            match c {
                '/' | '\n' => {
                    if file != 8 {
                        tracing::warn!(fen, divider = %c, "rejected malformed FEN: bad rank divider");
                        return Err(FenError::BadRankDivider(c));
                    }
                    rank -= 1;
                    file = 0;
                }
                '.' => file += 1,
                '1'..='8' => file += c.to_digit(10).unwrap() as u8,
                _ => {
                    let color = if c.is_uppercase() { Color::White } else { Color::Black };
                    let pc = Piece::from_code(c.to_ascii_uppercase()).ok_or_else(|| {
                        tracing::warn!(fen, code = %c, "rejected malformed FEN: bad piece code");
                        FenError::BadPieceCode(c)
                    })?;
                    if rank < 0 || file > 7 {
                        tracing::warn!(fen, "rejected malformed FEN: board field overruns the grid");
                        return Err(FenError::TruncatedBoard);
                    }
                    let sq = Square::new(rank as u8, file).ok_or_else(|| {
                        tracing::warn!(fen, "rejected malformed FEN: board field overruns the grid");
                        FenError::TruncatedBoard
                    })?;
                    pos.add_piece(sq, pc, color);
                    file += 1;
                }
            }
        }

        let side_field = fields.next().unwrap_or("w");
        pos.side_to_move = match side_field {
            "w" => Color::White,
            "b" => Color::Black,
            _ => {
                tracing::warn!(fen, side_field, "rejected malformed FEN: bad side to move");
                return Err(FenError::BadSideToMove(side_field.chars().next().unwrap_or('?')));
            }
        };

        let castle_field = fields.next().unwrap_or("-");
        if castle_field != "-" {
            for c in castle_field.chars() {
                pos.castle_rights |= match c {
                    'K' => CastleRights::WHITE_KINGSIDE,
                    'Q' => CastleRights::WHITE_QUEENSIDE,
                    'k' => CastleRights::BLACK_KINGSIDE,
                    'q' => CastleRights::BLACK_QUEENSIDE,
                    _ => {
                        tracing::warn!(fen, c = %c, "rejected malformed FEN: bad castling character");
                        return Err(FenError::BadCastlingChar(c));
                    }
                };
            }
        }

        let ep_field = fields.next().unwrap_or("-");
        pos.en_passant = if ep_field == "-" {
            None
        } else {
            Some(Square::from_algebraic(ep_field).ok_or_else(|| {
                tracing::warn!(fen, ep_field, "rejected malformed FEN: bad en-passant square");
                FenError::BadEnPassantSquare(ep_field.to_string())
            })?)
        };

        pos.halfmove_clock = match fields.next() {
            Some(s) => s.parse().map_err(|_| {
                tracing::warn!(fen, field = s, "rejected malformed FEN: bad halfmove clock");
                FenError::BadInteger(s.to_string())
            })?,
            None => 0,
        };
        pos.fullmove_number = match fields.next() {
            Some(s) => s.parse().map_err(|_| {
                tracing::warn!(fen, field = s, "rejected malformed FEN: bad fullmove number");
                FenError::BadInteger(s.to_string())
            })?,
            None => 1,
        };

        if pos.side_to_move == Color::Black {
            pos.hash ^= zobrist::BLACK_TO_MOVE_KEY;
        }
        pos.repetition.insert(pos.hash, 1);

        Ok(pos)
    }

    #[must_use]
    /// Encode this position as a FEN string.
    pub fn to_fen(&self) -> String {
        let mut s = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                let sq = Square::new(rank, file).unwrap();
                match self.piece_at(sq) {
                    None => empty_run += 1,
                    Some((pc, color)) => {
                        if empty_run > 0 {
                            s.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let c = pc.code();
                        s.push(if color == Color::White { c } else { c.to_ascii_lowercase() });
                    }
                }
            }
            if empty_run > 0 {
                s.push_str(&empty_run.to_string());
            }
            if rank != 0 {
                s.push('/');
            }
        }
        s.push(' ');
        s.push(if self.side_to_move == Color::White { 'w' } else { 'b' });
        s.push(' ');
        if self.castle_rights == CastleRights::NONE {
            s.push('-');
        } else {
            if self.castle_rights.kingside(Color::White) {
                s.push('K');
            }
            if self.castle_rights.queenside(Color::White) {
                s.push('Q');
            }
            if self.castle_rights.kingside(Color::Black) {
                s.push('k');
            }
            if self.castle_rights.queenside(Color::Black) {
                s.push('q');
            }
        }
        s.push(' ');
        match self.en_passant {
            Some(sq) => s.push_str(&sq.to_string()),
            None => s.push('-'),
        }
        s.push(' ');
        s.push_str(&self.halfmove_clock.to_string());
        s.push(' ');
        s.push_str(&self.fullmove_number.to_string());
        s
    }

    #[must_use]
    /// Parse a UCI move string in the context of this position, resolving
    /// castling and en-passant from the piece actually on the source
    /// square rather than from the text alone.
    pub fn move_from_uci(&self, s: &str) -> Result<Move, MoveParseError> {
        let base = Move::from_uci(s).map_err(|e| {
            tracing::warn!(uci = s, error = %e, "rejected malformed UCI move string");
            e
        })?;
        let from = base.from_square();
        let to = base.to_square();
        match self.piece_at(from) {
            Some((Piece::King, _)) if (from.file() as i8 - to.file() as i8).abs() == 2 => {
                Ok(Move::castling(from, to))
            }
            Some((Piece::Pawn, _))
                if Some(to) == self.en_passant && from.file() != to.file() =>
            {
                Ok(Move::en_passant(from, to))
            }
            _ => Ok(base),
        }
    }

    #[must_use]
    /// Recompute the Zobrist key from scratch, for verifying the
    /// incrementally maintained one (`Position`'s Zobrist-agreement
    /// property).
    pub fn recompute_hash(&self) -> u64 {
        let mut hash = 0u64;
        for sq in Square::ALL {
            if let Some((pc, color)) = self.piece_at(sq) {
                hash ^= zobrist::square_key(sq, Some(pc), color);
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= zobrist::BLACK_TO_MOVE_KEY;
        }
        hash
    }

    #[must_use]
    /// Check the structural invariants from the data model: the piece
    /// bitboards partition the occupied squares, the color bitboards are
    /// disjoint and union to the same set, and exactly one king of each
    /// color is present.
    pub fn check_invariants(&self) -> bool {
        let mut union = Bitboard::EMPTY;
        for i in 0..Piece::NUM {
            if !(self.piece_bb[i] & union).is_empty() {
                return false;
            }
            union |= self.piece_bb[i];
        }
        if union != self.all_bb {
            return false;
        }
        if !(self.color_bb[0] & self.color_bb[1]).is_empty() {
            return false;
        }
        if (self.color_bb[0] | self.color_bb[1]) != self.all_bb {
            return false;
        }
        for color in Color::ALL {
            if self.pieces(color, Piece::King).count_ones() != 1 {
                return false;
            }
        }
        if let Some(ep) = self.en_passant {
            if ep.rank() != 2 && ep.rank() != 5 {
                return false;
            }
        }
        true
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl Clone for Position {
    /// Copies board state but starts a fresh undo stack and repetition
    /// table: a cloned position has no history of its own to undo back
    /// through or detect repetition against.
    fn clone(&self) -> Position {
        let mut repetition = HashMap::default();
        repetition.insert(self.hash, 1);
        Position {
            piece_bb: self.piece_bb,
            color_bb: self.color_bb,
            all_bb: self.all_bb,
            mailbox: self.mailbox,
            king_sqs: self.king_sqs,
            side_to_move: self.side_to_move,
            castle_rights: self.castle_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
            undo_stack: Vec::new(),
            repetition,
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.piece_bb == other.piece_bb
            && self.color_bb == other.color_bb
            && self.side_to_move == other.side_to_move
            && self.castle_rights == other.castle_rights
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.hash == other.hash
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to {
        Square::G1 => (Square::H1, Square::F1),
        Square::C1 => (Square::A1, Square::D1),
        Square::G8 => (Square::H8, Square::F8),
        Square::C8 => (Square::A8, Square::D8),
        _ => unreachable!("castling move must land on g1, c1, g8, or c8"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_invariants_hold() {
        let pos = Position::new();
        assert!(pos.check_invariants());
        assert_eq!(pos.hash, pos.recompute_hash());
    }

    #[test]
    fn fen_round_trips_for_start_position() {
        let pos = Position::new();
        assert_eq!(pos.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    }

    #[test]
    fn make_unmake_round_trips_a_quiet_move() {
        let mut pos = Position::new();
        let before = pos.clone();
        let mv = Move::normal(Square::E2, Square::E4);
        pos.make(mv);
        assert_ne!(pos.hash, before.hash);
        assert_eq!(pos.hash, pos.recompute_hash());
        pos.unmake(mv);
        assert_eq!(pos, before);
        assert_eq!(pos.hash, pos.recompute_hash());
    }

    #[test]
    fn make_unmake_round_trips_a_capture() {
        let mut pos =
            Position::from_fen("rnb1kbnr/pppppppp/8/3q4/8/4N3/PPPPPPPP/RNBQKB1R w KQkq - 0 1")
                .unwrap();
        let before = pos.clone();
        let mv = Move::normal(Square::E3, Square::D5);
        pos.make(mv);
        assert_eq!(pos.hash, pos.recompute_hash());
        pos.unmake(mv);
        assert_eq!(pos, before);
    }

    #[test]
    fn castling_clears_both_rights() {
        let mut pos =
            Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        pos.make(Move::castling(Square::E1, Square::G1));
        assert!(!pos.castle_rights.kingside(Color::White));
        assert!(!pos.castle_rights.queenside(Color::White));
        assert!(pos.piece_at(Square::F1) == Some((Piece::Rook, Color::White)));
        assert!(pos.piece_at(Square::G1) == Some((Piece::King, Color::White)));
    }

    #[test]
    fn rook_move_clears_only_that_sides_right() {
        let mut pos =
            Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        pos.make(Move::normal(Square::A1, Square::B1));
        assert!(!pos.castle_rights.queenside(Color::White));
        assert!(pos.castle_rights.kingside(Color::White));
    }

    #[test]
    fn capturing_a_corner_rook_clears_opponents_right() {
        let mut pos =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R2QK1NR w KQkq - 0 1").unwrap();
        pos.make(Move::normal(Square::A1, Square::A8));
        assert!(!pos.castle_rights.queenside(Color::Black));
        assert!(pos.castle_rights.kingside(Color::Black));
    }

    #[test]
    fn fifty_move_rule_threshold() {
        let mut pos = Position::new();
        pos.halfmove_clock = 100;
        assert!(pos.is_fifty_move_draw());
    }

    #[test]
    #[tracing_test::traced_test]
    fn malformed_fen_logs_a_warning() {
        let result = Position::from_fen("not a fen");
        assert!(result.is_err());
        assert!(logs_contain("rejected malformed FEN"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn malformed_uci_move_logs_a_warning() {
        let pos = Position::new();
        let result = pos.move_from_uci("zzzz");
        assert!(result.is_err());
        assert!(logs_contain("rejected malformed UCI move string"));
    }
}
