// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-aligned paging math and paging-control indicators.
//!
//! A pager shows exactly one slot per viewport along its [`Axis`](crate::Axis),
//! so slot `i` starts at `i * page_extent`. Scroll gestures end on an arbitrary
//! offset; [`slot_at_offset`] snaps that offset to the nearest slot, which is
//! what a view-aligned scroll target behavior does.

use crate::PageId;

/// Returns the slot nearest to a scroll `offset`, for slots `page_extent` long.
///
/// - Offsets before the start snap to slot `0`.
/// - Offsets past the end snap to the last slot.
/// - A non-positive or non-finite `page_extent` snaps everything to slot `0`.
///
/// Returns `None` when there are no slots.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the position is clamped into 0..slots before the cast"
)]
pub fn slot_at_offset(offset: f64, page_extent: f64, slots: usize) -> Option<usize> {
    if slots == 0 {
        return None;
    }
    if !page_extent.is_finite() || page_extent <= 0.0 || offset.is_nan() || offset <= 0.0 {
        return Some(0);
    }
    let last = slots - 1;
    let position = offset / page_extent + 0.5;
    if position >= last as f64 {
        return Some(last);
    }
    Some(position as usize)
}

/// Returns the scroll offset at which `slot` is aligned with the viewport.
#[must_use]
pub fn offset_of_slot(slot: usize, page_extent: f64) -> f64 {
    slot as f64 * page_extent.max(0.0)
}

/// What a paging-control dot stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorSlot {
    /// An actual page.
    Page(PageId),
    /// The "new page" affordance after the last page.
    Append,
}

/// One paging-control dot, as yielded by
/// [`PagingController::indicators`](crate::PagingController::indicators).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Indicator {
    /// Slot position in paging order.
    pub index: usize,
    /// What the slot stands for.
    pub slot: IndicatorSlot,
    /// Whether the slot is the active selection.
    pub active: bool,
}
