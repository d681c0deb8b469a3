// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives.
//!
//! UI state machines often need "do this a little later" behavior: settle a
//! scroll position after an animation, expire a tooltip, debounce a search
//! field. Hard-wiring those to a specific executor or platform timer makes the
//! state machine difficult to test and impossible to share between hosts.
//!
//! This crate keeps the _bookkeeping_ of pending timers and leaves the clock to
//! the host. The core type is [`TimerQueue`], which tracks:
//! - A set of pending entries, each with a deadline and a caller payload.
//! - A [`TimerId`] handle per entry, used for cancellation and rescheduling.
//!
//! Time is a plain `u64` tick count in a caller-chosen unit (milliseconds by
//! convention). The queue never reads a clock; hosts call
//! [`TimerQueue::next_deadline`] to decide when to wake up and
//! [`TimerQueue::drain_due`] once they have.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//!
//! // Two timers, the second one superseding the first.
//! let first = timers.schedule_after(0, 1_500, "settle on card 3");
//! timers.cancel(first);
//! timers.schedule_after(100, 1_500, "settle on card 4");
//!
//! assert_eq!(timers.next_deadline(), Some(1_600));
//!
//! // Nothing is due yet.
//! assert_eq!(timers.drain_due(1_000).count(), 0);
//!
//! // Only the surviving timer fires.
//! let fired: Vec<_> = timers.drain_due(2_000).map(|t| t.payload).collect();
//! assert_eq!(fired, ["settle on card 4"]);
//! assert!(timers.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{Expired, TimerId, TimerQueue};
