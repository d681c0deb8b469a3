// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Handle to a timer scheduled on a [`TimerQueue`].
///
/// Ids are unique within one queue and never reused, so a stale handle can be
/// cancelled safely: it simply no longer matches anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A timer that reached its deadline, as returned by [`TimerQueue::pop_due`]
/// and [`TimerQueue::drain_due`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<T> {
    /// Handle the timer was scheduled under.
    pub id: TimerId,
    /// Deadline the timer was scheduled for.
    pub deadline: u64,
    /// Caller payload.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

/// Pending timers ordered by deadline.
///
/// Entries are kept sorted by `(deadline, id)`, so timers with equal deadlines
/// fire in the order they were scheduled. The queue is expected to hold a
/// handful of entries at a time; insertion and cancellation are linear.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedules `payload` to fire at the absolute tick `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.insert(Entry {
            id,
            deadline,
            payload,
        });
        id
    }

    /// Schedules `payload` to fire `delay` ticks after `now`.
    ///
    /// The deadline saturates at `u64::MAX`.
    pub fn schedule_after(&mut self, now: u64, delay: u64, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay), payload)
    }

    /// Cancels a pending timer, returning its payload.
    ///
    /// Returns `None` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let idx = self.position_of(id)?;
        Some(self.entries.remove(idx).payload)
    }

    /// Returns `true` if `id` is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns the deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<u64> {
        self.position_of(id).map(|idx| self.entries[idx].deadline)
    }

    /// Moves a pending timer to a new deadline, keeping its id and payload.
    ///
    /// Returns `false` if the timer is no longer pending.
    pub fn reschedule(&mut self, id: TimerId, deadline: u64) -> bool {
        let Some(idx) = self.position_of(id) else {
            return false;
        };
        let mut entry = self.entries.remove(idx);
        entry.deadline = deadline;
        self.insert(entry);
        true
    }

    /// Returns the earliest pending deadline.
    ///
    /// Hosts typically arm a single platform timer for this tick and call
    /// [`TimerQueue::drain_due`] when it fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first().map(|entry| entry.deadline)
    }

    /// Removes and returns the earliest timer if its deadline is `<= now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Expired<T>> {
        if self.entries.first()?.deadline > now {
            return None;
        }
        let Entry {
            id,
            deadline,
            payload,
        } = self.entries.remove(0);
        Some(Expired {
            id,
            deadline,
            payload,
        })
    }

    /// Removes and yields every timer whose deadline is `<= now`, earliest first.
    ///
    /// The due timers are removed even if the iterator is dropped early.
    pub fn drain_due(&mut self, now: u64) -> impl Iterator<Item = Expired<T>> + '_ {
        let split = self.entries.partition_point(|entry| entry.deadline <= now);
        self.entries.drain(..split).map(|entry| Expired {
            id: entry.id,
            deadline: entry.deadline,
            payload: entry.payload,
        })
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position_of(&self, id: TimerId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn insert(&mut self, entry: Entry<T>) {
        // Ids grow monotonically, so ties on the deadline keep scheduling order
        // as long as new entries go after existing ones with the same deadline.
        let idx = self.entries.partition_point(|existing| {
            (existing.deadline, existing.id) <= (entry.deadline, entry.id)
        });
        self.entries.insert(idx, entry);
    }
}
