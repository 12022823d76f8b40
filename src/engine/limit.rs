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

//! Search limiting.
//!
//! A `SearchLimit` is the one piece of timing/stopping state the front-end
//! and the searcher share. The front-end decides what a limit means (depth,
//! node count, fixed move time, or a time-control budget computed by
//! [`super::time`]) and builds one of these; the searcher only ever polls
//! it. The `stop` flag is also how a front-end cancels a running search
//! from another thread.

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Mutex, RwLock,
};
use std::time::{Duration, Instant};

#[derive(Debug)]
/// A limit on how long or how deep a search may run.
pub struct SearchLimit {
    /// Whether the search has been told to stop, either by timeout or by an
    /// explicit `stop()` call.
    over: AtomicBool,
    /// The cumulative number of nodes searched since the last `start()`.
    num_nodes: AtomicU64,
    /// A cap on the total number of nodes to search, if any.
    pub nodes_cap: RwLock<Option<u64>>,
    /// A cap on the iterative-deepening depth, if any.
    pub depth_cap: RwLock<Option<u8>>,
    /// The instant `start()` was called.
    start_time: Mutex<Instant>,
    /// The instant after which the search must stop, if timed.
    end_time: RwLock<Option<Instant>>,
    /// The duration to search for, if timed. Set once before `start()`.
    pub search_duration: Mutex<Option<Duration>>,
}

impl SearchLimit {
    #[must_use]
    /// A limit that never stops on its own; the caller must call `stop()`.
    pub fn infinite() -> SearchLimit {
        SearchLimit {
            over: AtomicBool::new(false),
            num_nodes: AtomicU64::new(0),
            nodes_cap: RwLock::new(None),
            depth_cap: RwLock::new(None),
            start_time: Mutex::new(Instant::now()),
            end_time: RwLock::new(None),
            search_duration: Mutex::new(None),
        }
    }

    #[must_use]
    /// A limit that stops iterative deepening once `depth` is reached.
    pub fn depth(depth: u8) -> SearchLimit {
        let limit = SearchLimit::infinite();
        *limit.depth_cap.write().unwrap() = Some(depth);
        limit
    }

    #[must_use]
    /// A limit that stops once `nodes` have been searched.
    pub fn nodes(nodes: u64) -> SearchLimit {
        let limit = SearchLimit::infinite();
        *limit.nodes_cap.write().unwrap() = Some(nodes);
        limit
    }

    #[must_use]
    /// A limit that stops once `duration` has elapsed since `start()`.
    pub fn duration(duration: Duration) -> SearchLimit {
        let limit = SearchLimit::infinite();
        *limit.search_duration.lock().unwrap() = Some(duration);
        limit
    }

    /// Reset counters and, if a duration was configured, arm the deadline.
    /// Must be called once at the beginning of a search.
    ///
    /// # Panics
    /// Panics if a lock is poisoned.
    pub fn start(&self) {
        self.num_nodes.store(0, Ordering::Relaxed);
        self.over.store(false, Ordering::Relaxed);
        *self.start_time.lock().unwrap() = Instant::now();
        if let Some(dur) = *self.search_duration.lock().unwrap() {
            *self.end_time.write().unwrap() = Some(Instant::now() + dur);
        }
    }

    /// Immediately mark the search as over. Safe to call from another
    /// thread while a search is running (the UCI `stop` command).
    pub fn stop(&self) {
        self.over.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over.load(Ordering::Relaxed)
    }

    /// Re-check the wall clock against the deadline, and latch `over` if
    /// it has passed. Cheap enough to call on every periodic node check.
    ///
    /// # Panics
    /// Panics if a lock is poisoned.
    pub fn update_time(&self) {
        if let Some(end) = *self.end_time.read().unwrap() {
            if Instant::now() >= end {
                self.over.store(true, Ordering::Relaxed);
            }
        }
    }

    #[must_use]
    /// Elapsed time since `start()` was last called.
    pub fn elapsed(&self) -> Duration {
        self.start_time.lock().unwrap().elapsed()
    }

    /// Add to the node count, latching `over` if the node cap is exceeded.
    ///
    /// # Panics
    /// Panics if a lock is poisoned.
    pub fn add_nodes(&self, nodes: u64) {
        let total = self.num_nodes.fetch_add(nodes, Ordering::Relaxed) + nodes;
        if let Some(cap) = *self.nodes_cap.read().unwrap() {
            if total >= cap {
                self.over.store(true, Ordering::Relaxed);
            }
        }
    }

    #[must_use]
    pub fn num_nodes(&self) -> u64 {
        self.num_nodes.load(Ordering::Relaxed)
    }

    #[must_use]
    /// Whether iterative deepening should stop before starting `next_depth`.
    pub fn depth_exhausted(&self, next_depth: u8) -> bool {
        matches!(*self.depth_cap.read().unwrap(), Some(cap) if next_depth > cap)
    }
}

impl Default for SearchLimit {
    fn default() -> SearchLimit {
        SearchLimit::infinite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn infinite_limit_never_latches_over_time() {
        let limit = SearchLimit::infinite();
        limit.start();
        limit.update_time();
        assert!(!limit.is_over());
    }

    #[test]
    fn explicit_stop_latches_over() {
        let limit = SearchLimit::infinite();
        limit.start();
        limit.stop();
        assert!(limit.is_over());
    }

    #[test]
    fn duration_limit_latches_over_after_elapsing() {
        let limit = SearchLimit::duration(Duration::from_millis(5));
        limit.start();
        thread::sleep(Duration::from_millis(20));
        limit.update_time();
        assert!(limit.is_over());
    }

    #[test]
    fn node_cap_latches_over_once_reached() {
        let limit = SearchLimit::nodes(100);
        limit.start();
        limit.add_nodes(50);
        assert!(!limit.is_over());
        limit.add_nodes(60);
        assert!(limit.is_over());
    }

    #[test]
    fn depth_cap_is_respected() {
        let limit = SearchLimit::depth(4);
        assert!(!limit.depth_exhausted(4));
        assert!(limit.depth_exhausted(5));
    }
}
