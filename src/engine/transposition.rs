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

//! The transposition table: a fixed-size array from Zobrist key to the best
//! information the search has previously found about that position.
//!
//! Entries are not synchronized. A reader validates the stored key against
//! the probe key before trusting an entry, and validates the stored move's
//! legality before playing it; a torn read under concurrent access is
//! harmless because a mismatched key is simply treated as a miss.

use crate::base::Move;

use super::eval::Eval;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// What kind of bound a stored evaluation represents.
pub enum BoundType {
    /// `value` is a lower bound (a fail-high / beta cutoff occurred).
    Lower,
    /// `value` is an upper bound (no move raised alpha).
    Upper,
    /// `value` is the exact score of the position.
    Exact,
}

/// Sentinel depth marking an entry produced by quiescence search rather
/// than the main search. Quiescence entries are only ever consulted by
/// quiescence probes.
pub const DEPTH_QUIESCENCE: i8 = -1;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// A single transposition-table slot.
pub struct TTEntry {
    /// The full Zobrist key of the position this entry describes, used to
    /// detect both empty slots (key 0, vanishingly unlikely for a real
    /// position) and hash collisions against other positions.
    pub key: u64,
    /// The depth to which this entry was searched; `DEPTH_QUIESCENCE` for a
    /// quiescence-search entry.
    pub depth: i8,
    /// The best move known in this position, or `Move::NULL` if none.
    pub best_move: Move,
    /// The stored evaluation, and what kind of bound it is.
    pub value: Eval,
    pub bound: BoundType,
}

impl TTEntry {
    const EMPTY_KEY: u64 = 0;

    fn is_empty(&self) -> bool {
        self.key == TTEntry::EMPTY_KEY
    }
}

const EMPTY_ENTRY: TTEntry = TTEntry {
    key: TTEntry::EMPTY_KEY,
    depth: 0,
    best_move: Move::NULL,
    value: Eval::DRAW,
    bound: BoundType::Exact,
};

#[derive(Clone, Debug)]
/// A vector of `N` entries (`N` a power of two), indexed by `key mod N`.
pub struct TTable {
    entries: Vec<TTEntry>,
    /// `entries.len() - 1`; since the length is a power of two this masks
    /// a key down to a valid index without a division.
    mask: u64,
}

/// Default table size, picked so the default `TTable::new()` is usable
/// without a caller having to think about sizing: 2^20 entries times 24
/// bytes each is about 25 MB.
const DEFAULT_LOG2_ENTRIES: u32 = 20;

impl TTable {
    #[must_use]
    /// A table sized for casual use; callers that care about memory should
    /// use [`TTable::with_size`] instead.
    pub fn new() -> TTable {
        TTable::with_capacity(DEFAULT_LOG2_ENTRIES)
    }

    #[must_use]
    /// Construct a table using at most `size_mb` megabytes, rounding the
    /// entry count down to the nearest power of two.
    pub fn with_size(size_mb: usize) -> TTable {
        if size_mb == 0 {
            return TTable::with_capacity(0);
        }
        let max_entries = (size_mb * 1_000_000 / std::mem::size_of::<TTEntry>()).max(1);
        let log2 = 63 - max_entries.leading_zeros();
        TTable::with_capacity(log2)
    }

    fn with_capacity(log2_entries: u32) -> TTable {
        let len = 1usize << log2_entries;
        TTable {
            entries: vec![EMPTY_ENTRY; len],
            mask: (len - 1) as u64,
        }
    }

    #[inline(always)]
    fn index_for(&self, key: u64) -> usize {
        (key & self.mask) as usize
    }

    #[must_use]
    /// Probe the table for `key`. Returns `None` on a miss or a slot
    /// occupied by a different position's entry.
    pub fn probe(&self, key: u64) -> Option<&TTEntry> {
        let entry = &self.entries[self.index_for(key)];
        if !entry.is_empty() && entry.key == key {
            Some(entry)
        } else {
            None
        }
    }

    /// Store an entry, applying the replacement policy:
    /// - an empty slot is always written;
    /// - a slot holding an exact/PV entry is kept over an incoming
    ///   non-exact one;
    /// - otherwise the incoming entry wins if its depth is at least the
    ///   occupant's.
    pub fn store(&mut self, entry: TTEntry) {
        let idx = self.index_for(entry.key);
        let occupant = &self.entries[idx];
        let keep_occupant = !occupant.is_empty()
            && occupant.bound == BoundType::Exact
            && entry.bound != BoundType::Exact
            || (!occupant.is_empty() && entry.depth < occupant.depth);
        if !keep_occupant {
            self.entries[idx] = entry;
        }
    }

    /// Zero every slot.
    pub fn clear(&mut self) {
        self.entries.fill(EMPTY_ENTRY);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TTable {
    fn default() -> TTable {
        TTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Square;

    fn entry(key: u64, depth: i8, bound: BoundType) -> TTEntry {
        TTEntry {
            key,
            depth,
            best_move: Move::normal(Square::E2, Square::E4),
            value: Eval::centipawns(42),
            bound,
        }
    }

    #[test]
    fn miss_on_empty_table() {
        let tt = TTable::with_capacity(4);
        assert!(tt.probe(12345).is_none());
    }

    #[test]
    fn store_then_probe_hits() {
        let mut tt = TTable::with_capacity(4);
        tt.store(entry(77, 5, BoundType::Exact));
        let found = tt.probe(77).unwrap();
        assert_eq!(found.depth, 5);
        assert_eq!(found.bound, BoundType::Exact);
    }

    #[test]
    fn key_mismatch_in_slot_is_a_miss() {
        let mut tt = TTable::with_capacity(1);
        // with only 2 slots, keys 0 and 2 collide.
        tt.store(entry(0, 5, BoundType::Exact));
        assert!(tt.probe(2).is_none());
    }

    #[test]
    fn exact_entry_survives_a_shallower_non_exact_overwrite() {
        let mut tt = TTable::with_capacity(4);
        tt.store(entry(9, 5, BoundType::Exact));
        tt.store(entry(9, 10, BoundType::Lower));
        assert_eq!(tt.probe(9).unwrap().bound, BoundType::Exact);
    }

    #[test]
    fn deeper_non_exact_entry_overwrites_a_shallower_one() {
        let mut tt = TTable::with_capacity(4);
        tt.store(entry(9, 3, BoundType::Lower));
        tt.store(entry(9, 8, BoundType::Upper));
        let found = tt.probe(9).unwrap();
        assert_eq!(found.depth, 8);
        assert_eq!(found.bound, BoundType::Upper);
    }

    #[test]
    fn shallower_entry_does_not_overwrite_a_deeper_one() {
        let mut tt = TTable::with_capacity(4);
        tt.store(entry(9, 8, BoundType::Lower));
        tt.store(entry(9, 3, BoundType::Upper));
        assert_eq!(tt.probe(9).unwrap().depth, 8);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut tt = TTable::with_capacity(4);
        tt.store(entry(9, 8, BoundType::Exact));
        tt.clear();
        assert!(tt.probe(9).is_none());
    }
}
