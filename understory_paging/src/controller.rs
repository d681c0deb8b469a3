// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::{Drain, Vec};

use hashbrown::HashMap;
use understory_timing::{TimerId, TimerQueue};

use crate::layout::{Indicator, IndicatorSlot, offset_of_slot, slot_at_offset};
use crate::{
    ActiveSelection, Axis, Page, PageId, PagingConfig, PagingError, PagingEvent, SelectionCause,
    SelectionMode,
};

/// The deferred selection armed by the most recent append.
#[derive(Copy, Clone, Debug)]
struct PendingSettle {
    timer: TimerId,
    target: PageId,
}

/// Paged-card state: an append-only page sequence plus one active-page pointer.
///
/// The controller is host-agnostic. Time only enters through the `now` tick
/// passed to [`PagingController::append_page`] and [`PagingController::advance`];
/// hosts ask [`PagingController::next_deadline`] when to call `advance` next.
///
/// Dropping the controller drops any pending deferred selection with it.
#[derive(Clone, Debug)]
pub struct PagingController<T> {
    pages: Vec<Page<T>>,
    positions: HashMap<PageId, usize>,
    selection: ActiveSelection,
    mode: SelectionMode,
    axis: Axis,
    settle_delay: u64,
    next_id: u64,
    timers: TimerQueue<PageId>,
    pending: Option<PendingSettle>,
    events: Vec<PagingEvent>,
    revision: u64,
}

impl<T> PagingController<T> {
    /// Creates a controller over the initial `payloads`, in order.
    ///
    /// The initial selection is index `0` in index mode (the append slot when
    /// there are no pages), or the first page's id in identity mode (unset when
    /// there are no pages).
    pub fn new<I>(config: PagingConfig, payloads: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut controller = Self {
            pages: Vec::new(),
            positions: HashMap::new(),
            selection: ActiveSelection::unset(config.mode),
            mode: config.mode,
            axis: config.axis,
            settle_delay: config.settle_delay,
            next_id: 0,
            timers: TimerQueue::new(),
            pending: None,
            events: Vec::new(),
            revision: 0,
        };
        for payload in payloads {
            controller.push(payload);
        }
        controller.selection = match config.mode {
            SelectionMode::Index => ActiveSelection::Index(Some(0)),
            SelectionMode::Identity => {
                ActiveSelection::Identity(controller.pages.first().map(Page::id))
            }
        };
        controller
    }

    /// Creates an index-mode controller with default settings.
    pub fn with_pages<I>(payloads: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(PagingConfig::default(), payloads)
    }

    /// Returns the selection mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns the configured settle delay in ticks.
    #[must_use]
    pub fn settle_delay(&self) -> u64 {
        self.settle_delay
    }

    /// Returns the pages in paging order.
    #[must_use]
    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if there are no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the index of the "new page" affordance, which equals [`Self::len`].
    #[must_use]
    pub fn append_slot(&self) -> usize {
        self.pages.len()
    }

    /// Returns the page with the given id.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page<T>> {
        self.position_of(id).map(|idx| &self.pages[idx])
    }

    /// Returns the page at `index`.
    #[must_use]
    pub fn page_at(&self, index: usize) -> Option<&Page<T>> {
        self.pages.get(index)
    }

    /// Returns the position of a page in paging order.
    #[must_use]
    pub fn position_of(&self, id: PageId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Returns the active selection in the controller's representation.
    #[must_use]
    pub fn current_selection(&self) -> ActiveSelection {
        self.selection
    }

    /// Returns the active slot as an index, whatever the mode.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self.selection {
            ActiveSelection::Index(index) => index,
            ActiveSelection::Identity(id) => id.and_then(|id| self.position_of(id)),
        }
    }

    /// Returns the active page, or `None` when unset or on the append slot.
    #[must_use]
    pub fn active_page(&self) -> Option<&Page<T>> {
        self.active_index().and_then(|idx| self.pages.get(idx))
    }

    /// Returns `true` if the append slot is focused.
    #[must_use]
    pub fn is_append_slot_active(&self) -> bool {
        self.selection == ActiveSelection::Index(Some(self.append_slot()))
    }

    /// Returns the revision counter.
    ///
    /// It is bumped on every semantic change (pages, payloads, selection, axis,
    /// pending settle) and left alone by no-op commands.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the change notifications accumulated since the last drain.
    #[must_use]
    pub fn events(&self) -> &[PagingEvent] {
        &self.events
    }

    /// Removes and yields the change notifications accumulated since the last call.
    pub fn drain_events(&mut self) -> Drain<'_, PagingEvent> {
        self.events.drain(..)
    }

    /// Selects the slot at `index`.
    ///
    /// `index` must be in `[0, len]`; `len` focuses the append slot. In identity
    /// mode the page at `index` is selected by its id, and the append slot
    /// leaves the selection unset.
    pub fn select_by_index(&mut self, index: usize) -> Result<(), PagingError> {
        let append_slot = self.append_slot();
        if index > append_slot {
            return Err(PagingError::OutOfRange { index, append_slot });
        }
        let next = match self.mode {
            SelectionMode::Index => ActiveSelection::Index(Some(index)),
            SelectionMode::Identity => {
                ActiveSelection::Identity(self.pages.get(index).map(Page::id))
            }
        };
        self.set_selection(next, SelectionCause::Command);
        Ok(())
    }

    /// Selects the page with the given id.
    ///
    /// In index mode the page's position is selected.
    pub fn select_by_identity(&mut self, id: PageId) -> Result<(), PagingError> {
        let position = self.position_of(id).ok_or(PagingError::UnknownPage(id))?;
        let next = match self.mode {
            SelectionMode::Index => ActiveSelection::Index(Some(position)),
            SelectionMode::Identity => ActiveSelection::Identity(Some(id)),
        };
        self.set_selection(next, SelectionCause::Command);
        Ok(())
    }

    /// Moves to the "unset" state.
    pub fn clear_selection(&mut self) {
        self.set_selection(ActiveSelection::unset(self.mode), SelectionCause::Cleared);
    }

    /// Appends a page and arms a deferred selection of it.
    ///
    /// The selection is left as is; `settle_delay` ticks after `now`,
    /// [`PagingController::advance`] moves it to the new page. A deferred
    /// selection still pending from an earlier append is discarded.
    pub fn append_page(&mut self, now: u64, payload: T) -> PageId {
        let id = self.push(payload);
        let index = self.pages.len() - 1;
        self.events.push(PagingEvent::PageAppended { id, index });

        self.discard_pending();
        let timer = self.timers.schedule_after(now, self.settle_delay, id);
        self.pending = Some(PendingSettle { timer, target: id });
        let deadline = now.saturating_add(self.settle_delay);
        self.events.push(PagingEvent::SettleScheduled {
            target: id,
            deadline,
        });
        paging_debug!(page = id.get(), index, deadline, "appended page");

        self.bump_revision();
        id
    }

    /// Replaces the payload of a page, returning the previous one.
    pub fn replace_payload(&mut self, id: PageId, payload: T) -> Result<T, PagingError> {
        let position = self.position_of(id).ok_or(PagingError::UnknownPage(id))?;
        let previous = self.pages[position].replace_payload(payload);
        self.events.push(PagingEvent::PayloadReplaced(id));
        self.bump_revision();
        Ok(previous)
    }

    /// Returns the page a deferred selection will move to, if one is pending.
    #[must_use]
    pub fn pending_selection(&self) -> Option<PageId> {
        self.pending.map(|pending| pending.target)
    }

    /// Discards the pending deferred selection.
    ///
    /// Returns `false` if none was pending.
    pub fn cancel_pending_selection(&mut self) -> bool {
        if self.discard_pending() {
            self.bump_revision();
            true
        } else {
            false
        }
    }

    /// Returns the tick at which [`PagingController::advance`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Applies deferred selections that are due at `now`.
    ///
    /// Returns the new selection if it changed.
    pub fn advance(&mut self, now: u64) -> Option<ActiveSelection> {
        let mut settled = None;
        let due: Vec<_> = self.timers.drain_due(now).collect();
        for expired in due {
            let Some(pending) = self.pending else {
                continue;
            };
            if pending.timer != expired.id {
                continue;
            }
            self.pending = None;
            let position = self.position_of(pending.target);
            debug_assert!(
                position.is_some(),
                "pages are append-only, so a settle target stays in the sequence"
            );
            let Some(position) = position else {
                continue;
            };
            let next = match self.mode {
                SelectionMode::Index => ActiveSelection::Index(Some(position)),
                SelectionMode::Identity => ActiveSelection::Identity(Some(pending.target)),
            };
            paging_debug!(page = pending.target.get(), position, now, "settle fired");
            if self.set_selection(next, SelectionCause::Settle) {
                settled = Some(next);
            } else {
                self.bump_revision();
            }
        }
        settled
    }

    /// Returns the layout axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Sets the layout axis. Pages and selection are unaffected.
    pub fn set_axis(&mut self, axis: Axis) {
        if self.axis == axis {
            return;
        }
        self.axis = axis;
        self.events.push(PagingEvent::AxisChanged(axis));
        self.bump_revision();
    }

    /// Switches between horizontal and vertical layout.
    pub fn toggle_axis(&mut self) {
        self.set_axis(self.axis.flipped());
    }

    /// Returns the number of selectable slots: pages, plus the append slot in
    /// index mode.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        match self.mode {
            SelectionMode::Index => self.pages.len() + 1,
            SelectionMode::Identity => self.pages.len(),
        }
    }

    /// Yields one paging-control indicator per slot, in paging order.
    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        let active = self.active_index();
        let append = match self.mode {
            SelectionMode::Index => Some(Indicator {
                index: self.append_slot(),
                slot: IndicatorSlot::Append,
                active: self.is_append_slot_active(),
            }),
            SelectionMode::Identity => None,
        };
        self.pages
            .iter()
            .enumerate()
            .map(move |(index, page)| Indicator {
                index,
                slot: IndicatorSlot::Page(page.id()),
                active: active == Some(index),
            })
            .chain(append)
    }

    /// Snaps a scroll `offset` to the nearest slot and selects it.
    ///
    /// Returns the selected slot, or `None` when there is nothing to select
    /// (identity mode without pages).
    pub fn select_at_offset(&mut self, offset: f64, page_extent: f64) -> Option<usize> {
        let slot = slot_at_offset(offset, page_extent, self.slot_count())?;
        let next = match self.mode {
            SelectionMode::Index => ActiveSelection::Index(Some(slot)),
            SelectionMode::Identity => ActiveSelection::Identity(Some(self.pages[slot].id())),
        };
        self.set_selection(next, SelectionCause::Scroll);
        Some(slot)
    }

    /// Returns the scroll offset that aligns the active slot with the viewport.
    #[must_use]
    pub fn active_offset(&self, page_extent: f64) -> Option<f64> {
        self.active_index()
            .map(|slot| offset_of_slot(slot, page_extent))
    }

    fn push(&mut self, payload: T) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        self.positions.insert(id, self.pages.len());
        self.pages.push(Page::new(id, payload));
        id
    }

    /// Updates the selection, returning `true` if it changed.
    fn set_selection(&mut self, next: ActiveSelection, cause: SelectionCause) -> bool {
        if self.selection == next {
            return false;
        }
        let previous = core::mem::replace(&mut self.selection, next);
        self.events.push(PagingEvent::SelectionChanged {
            previous,
            current: next,
            cause,
        });
        paging_debug!(?previous, current = ?next, ?cause, "selection changed");
        self.bump_revision();
        true
    }

    /// Drops the pending settle without bumping the revision.
    fn discard_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.timers.cancel(pending.timer);
        self.events.push(PagingEvent::SettleDiscarded {
            target: pending.target,
        });
        paging_debug!(page = pending.target.get(), "settle discarded");
        true
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
