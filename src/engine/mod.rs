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

//! Position evaluation and search, built on top of [`crate::base`].
//!
//! Everything in this module is side-to-move relative: a positive
//! [`eval::Eval`] always means "good for whoever is about to move", never
//! "good for White". That convention is what lets [`search::search`]'s
//! negamax recursion negate a child score and use it directly as the
//! parent's.

pub mod eval;
pub mod evaluate;
pub mod limit;
mod pick;
mod pst;
pub mod search;
pub mod time;
pub mod transposition;

pub use eval::Eval;
pub use evaluate::evaluate;
pub use limit::SearchLimit;
pub use search::{search, SearchInfo};
pub use transposition::TTable;
