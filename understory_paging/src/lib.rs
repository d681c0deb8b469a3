// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_paging --heading-base-level=0

//! Understory Paging: a paged-card state controller.
//!
//! This crate holds the state a paging UI needs (a horizontal or vertical
//! strip of cards, one visible at a time, with a "new card" affordance at the
//! end) without knowing anything about how the cards are drawn or scrolled.
//!
//! The core type is [`PagingController`], which tracks:
//! - An ordered, append-only sequence of [`Page`]s, each with a stable [`PageId`].
//! - One [`ActiveSelection`], expressed either by index or by identity
//!   depending on the configured [`SelectionMode`].
//! - A deferred "settle" selection armed by each append: once the host clock
//!   passes the deadline, the selection moves to the appended page. A newer
//!   append discards the older deferred selection, so only the latest wins.
//! - A revision counter and a queue of [`PagingEvent`]s for observers.
//!
//! ## Index mode and the append slot
//!
//! In index mode the valid indices are `0..=len`. Index `len` is the
//! _append slot_: the position of the "new card" button after the last page.
//!
//! ```rust
//! use understory_paging::{ActiveSelection, PagingController, PagingError};
//!
//! let mut pager = PagingController::with_pages(["Card 1", "Card 2"]);
//! assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));
//!
//! // Focus the "new card" button.
//! pager.select_by_index(2).unwrap();
//! assert!(pager.is_append_slot_active());
//!
//! // Nothing lives past the append slot.
//! assert_eq!(
//!     pager.select_by_index(3),
//!     Err(PagingError::OutOfRange { index: 3, append_slot: 2 }),
//! );
//! ```
//!
//! ## Deferred selection after an append
//!
//! Time is supplied by the host as `u64` ticks (milliseconds by convention).
//!
//! ```rust
//! use understory_paging::{ActiveSelection, PagingController};
//!
//! let mut pager = PagingController::with_pages(["Card 1", "Card 2"]);
//!
//! pager.append_page(0, "Card 3");
//! assert_eq!(pager.len(), 3);
//! // The selection waits for the insertion animation to settle.
//! assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));
//! assert_eq!(pager.next_deadline(), Some(1_500));
//!
//! assert_eq!(pager.advance(1_000), None);
//! assert_eq!(pager.advance(1_500), Some(ActiveSelection::Index(Some(2))));
//! ```
//!
//! Hosts that run on tokio can use `runtime::AsyncPaging` (feature `tokio`),
//! which arms a tokio timer per append instead of asking the host to call
//! [`PagingController::advance`].
//!
//! ## Features
//!
//! - `std` (default): forward `std` to dependencies.
//! - `serde`: `Serialize`/`Deserialize` for [`PagingConfig`] and value types.
//! - `tracing`: emit `tracing` events from the controller.
//! - `tokio`: the `runtime` module.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "tracing")]
macro_rules! paging_debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! paging_debug {
    ($($arg:tt)*) => {};
}

mod config;
mod controller;
mod error;
mod event;
pub mod layout;
mod page;
mod selection;

#[cfg(feature = "tokio")]
pub mod runtime;

pub use config::{Axis, DEFAULT_SETTLE_DELAY, PagingConfig};
pub use controller::PagingController;
pub use error::PagingError;
pub use event::{PagingEvent, SelectionCause};
pub use layout::{Indicator, IndicatorSlot};
pub use page::{Page, PageId};
pub use selection::{ActiveSelection, SelectionMode};
