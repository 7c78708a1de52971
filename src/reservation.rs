//! Work reservation: hands disjoint contiguous index ranges to device workers.
//!
//! Mirrors the mutex-guarded counter pattern `io::compress_mt::WriteRegister`
//! uses for chunk-ID bookkeeping, adapted here to a single `u64` cursor
//! instead of a `BTreeMap`.

use std::sync::Mutex;

/// Shared state for the reservation protocol. `global_stop` and
/// `reservation_size` are fixed at construction; `global_start` advances
/// under the lock as workers claim ranges.
pub struct ReservationState {
    global_start: Mutex<u64>,
    global_stop: u64,
    reservation_size: u64,
}

/// A contiguous, half-open index range `[start, stop)` claimed by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub start: u64,
    pub stop: u64,
}

impl ReservationState {
    /// `global_start` begins at `first_index` (normally `P[min_length-1]`);
    /// `global_stop` is the end of the enumerated range (`P[max_length]`).
    pub fn new(first_index: u64, global_stop: u64, reservation_size: u64) -> Self {
        ReservationState {
            global_start: Mutex::new(first_index),
            global_stop,
            reservation_size: reservation_size.max(1),
        }
    }

    /// Claims the next `reservation_size`-wide slice, truncated at
    /// `global_stop`. Returns `None` once the range is exhausted.
    pub fn reserve(&self) -> Option<Reservation> {
        let mut start = self.global_start.lock().expect("reservation lock poisoned");
        if *start >= self.global_stop {
            return None;
        }
        let claimed_start = *start;
        let claimed_stop = (claimed_start + self.reservation_size).min(self.global_stop);
        *start = claimed_stop;
        Some(Reservation {
            start: claimed_start,
            stop: claimed_stop,
        })
    }

    pub fn global_stop(&self) -> u64 {
        self.global_stop
    }
}
