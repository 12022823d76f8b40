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

//! A position score, fixed on integer centipawns rather than floats: exact
//! equality, no NaN pitfalls, and exact comparisons against the mate
//! sentinels below.
//!
//! Unlike a White-relative evaluation, an `Eval` is always signed from the
//! perspective of whoever is to move in the position it describes. Negating
//! an `Eval` flips whose perspective it is taken from, which is exactly the
//! operation negamax needs at every recursive step.

use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A side-to-move-relative position score, in centipawns.
pub struct Eval(i32);

impl Eval {
    /// Larger in magnitude than any evaluation a real position can produce;
    /// used as the alpha-beta search window's initial bounds.
    pub const POS_INFTY: Eval = Eval(1_000_000);
    /// See [`Eval::POS_INFTY`].
    pub const NEG_INFTY: Eval = Eval(-1_000_000);

    /// A drawn position: fifty-move rule, threefold repetition, or
    /// stalemate.
    pub const DRAW: Eval = Eval(0);

    /// Evaluations with a magnitude at or above this are mate scores, not
    /// material/positional ones; `POS_INFTY` minus a few hundred halfmoves
    /// of clock never comes close to crossing back below it.
    const MATE_THRESHOLD: i32 = 900_000;

    #[must_use]
    #[inline(always)]
    /// Construct a score from a raw centipawn value.
    pub const fn centipawns(x: i32) -> Eval {
        Eval(x)
    }

    #[must_use]
    #[inline(always)]
    pub const fn centipawn_value(self) -> i32 {
        self.0
    }

    #[must_use]
    #[inline(always)]
    /// The score of the side to move having just been checkmated, given the
    /// position's halfmove clock at the mated node. Shorter forced mates
    /// are naturally reached with a smaller clock value than longer ones,
    /// so this value alone is enough for the search to prefer them.
    pub const fn mated_at(halfmove_clock: u8) -> Eval {
        Eval(Eval::NEG_INFTY.0 + halfmove_clock as i32)
    }

    #[must_use]
    #[inline(always)]
    pub const fn is_mate(self) -> bool {
        self.0 >= Eval::MATE_THRESHOLD || self.0 <= -Eval::MATE_THRESHOLD
    }
}

impl Display for Eval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            write!(f, "00.00")
        } else if self.is_mate() {
            if self.0 > 0 {
                write!(f, "+M{}", Eval::POS_INFTY.0 - self.0)
            } else {
                write!(f, "-M{}", self.0 - Eval::NEG_INFTY.0)
            }
        } else {
            write!(f, "{:+.2}", f64::from(self.0) / 100.0)
        }
    }
}

impl Neg for Eval {
    type Output = Eval;
    #[inline(always)]
    fn neg(self) -> Eval {
        Eval(-self.0)
    }
}

impl Add for Eval {
    type Output = Eval;
    #[inline(always)]
    fn add(self, rhs: Eval) -> Eval {
        Eval(self.0 + rhs.0)
    }
}

impl Sub for Eval {
    type Output = Eval;
    #[inline(always)]
    fn sub(self, rhs: Eval) -> Eval {
        Eval(self.0 - rhs.0)
    }
}

impl AddAssign for Eval {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Eval) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Eval {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Eval) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_perspective() {
        let e = Eval::centipawns(150);
        assert_eq!(-e, Eval::centipawns(-150));
        assert_eq!(-(-e), e);
    }

    #[test]
    fn shorter_mate_is_preferred_by_the_side_delivering_it() {
        let quick = Eval::mated_at(2);
        let slow = Eval::mated_at(40);
        // Both are scores for the *mated* side, so the side that delivered
        // mate prefers searching into the branch with the more negative
        // (here, the quicker) mate when comparing from the mating side's
        // perspective, i.e. prefers `-quick` over `-slow`.
        assert!(-quick > -slow);
    }

    #[test]
    fn mate_scores_are_classified_as_mate() {
        assert!(Eval::mated_at(0).is_mate());
        assert!((-Eval::mated_at(0)).is_mate());
        assert!(!Eval::centipawns(500).is_mate());
    }

    #[test]
    fn draw_display_is_a_flat_string() {
        assert_eq!(Eval::DRAW.to_string(), "00.00");
    }
}
