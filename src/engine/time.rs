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

//! Time-control budgeting.
//!
//! Decides how much of the remaining clock to spend searching this move.
//! The budget shrinks as the game goes on (fewer moves expected to remain)
//! and as the opening deepens past move 10 (the `factor` term), without any
//! position-complexity analysis.

use std::time::Duration;

#[must_use]
/// Compute the time budget for the upcoming search, given the fullmove
/// number of the position about to be searched and the time left on the
/// clock for the side to move.
pub fn budget(fullmove_number: u16, time_left: Duration) -> Duration {
    let capped_move = u32::from(fullmove_number.min(10));
    let moves_left = (45 - capped_move).max(5);
    let target = time_left / moves_left;
    let factor = 2.0 - f64::from(capped_move) / 10.0;
    target.mul_f64(factor)
}

#[must_use]
/// Whether the searcher should decline to start another root-level move
/// given how much of the budget has already elapsed. This is a heuristic
/// for the *next* iteration's projected cost, not a hard deadline.
pub fn should_stop_between_root_moves(elapsed: Duration, budget: Duration) -> bool {
    elapsed.as_secs_f64() >= 0.6 * budget.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_game_budget_uses_the_widest_factor() {
        // capped_move = min(1, 10) = 1: moves_left = max(45-1, 5) = 44,
        // factor = 2.0 - 1/10 = 1.9, target = 440/44 = 10s, budget = 19s.
        let b = budget(1, Duration::from_secs(440));
        assert_eq!(b, Duration::from_secs(19));
    }

    #[test]
    fn budget_shrinks_as_fullmove_number_approaches_the_cap() {
        let early = budget(1, Duration::from_secs(600));
        let later = budget(10, Duration::from_secs(600));
        assert!(later < early);
    }

    #[test]
    fn move_number_cap_is_reached_by_move_ten() {
        // capped_move maxes out at min(fullmove_number, 10) = 10 for any
        // fullmove_number >= 10, so moves_left = max(45-10, 5) = 35 here and
        // for every later move alike.
        let b = budget(10, Duration::from_secs(350));
        assert_eq!(b, Duration::from_secs(10));
        assert_eq!(budget(10, Duration::from_secs(350)), budget(40, Duration::from_secs(350)));
    }

    #[test]
    fn root_move_heuristic_trips_at_sixty_percent() {
        let budget = Duration::from_secs(10);
        assert!(!should_stop_between_root_moves(
            Duration::from_secs(5),
            budget
        ));
        assert!(should_stop_between_root_moves(
            Duration::from_secs(7),
            budget
        ));
    }
}
