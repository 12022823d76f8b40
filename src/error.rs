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

//! Typed errors for the crate's parsing boundary.
//!
//! Internal invariant violations are not represented here: those are bugs,
//! not malformed input, and are handled with `debug_assert!`/`panic!` at the
//! call site instead of a recoverable `Result`.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
/// Reasons a FEN string can be rejected.
pub enum FenError {
    #[error("FEN ended before the board section was fully parsed")]
    TruncatedBoard,
    #[error("expected '/' or end of board section, found {0:?}")]
    BadRankDivider(char),
    #[error("unrecognized piece code {0:?}")]
    BadPieceCode(char),
    #[error("expected a space after the board section")]
    MissingSeparator,
    #[error("unrecognized side-to-move character {0:?}")]
    BadSideToMove(char),
    #[error("unrecognized castling-rights character {0:?}")]
    BadCastlingChar(char),
    #[error("malformed en-passant square {0:?}")]
    BadEnPassantSquare(String),
    #[error("malformed integer field {0:?}")]
    BadInteger(String),
    #[error("FEN describes an illegal position: {0}")]
    IllegalPosition(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
/// Reasons a UCI-style move string can be rejected.
pub enum MoveParseError {
    #[error("move string has length {0}, expected 4 or 5")]
    BadLength(usize),
    #[error("square text {0:?} is not a valid square")]
    BadSquare([char; 2]),
    #[error("promotion letter {0:?} is not one of n, b, r, q")]
    BadPromotion(char),
    #[error("move is not legal in the current position")]
    Illegal,
}
