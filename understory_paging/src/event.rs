// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{ActiveSelection, Axis, PageId};

/// What moved the active selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionCause {
    /// `select_by_index` or `select_by_identity`.
    Command,
    /// A scroll offset snapped to a slot.
    Scroll,
    /// A deferred selection after an append reached its deadline.
    Settle,
    /// `clear_selection`.
    Cleared,
}

/// Change notification emitted by a [`PagingController`](crate::PagingController).
///
/// Events accumulate until the host calls
/// [`PagingController::drain_events`](crate::PagingController::drain_events).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagingEvent {
    /// A page was appended at `index`.
    PageAppended {
        /// Id of the new page.
        id: PageId,
        /// Position of the new page.
        index: usize,
    },
    /// A page payload was replaced.
    PayloadReplaced(PageId),
    /// The active selection changed.
    SelectionChanged {
        /// Selection before the change.
        previous: ActiveSelection,
        /// Selection after the change.
        current: ActiveSelection,
        /// What caused the change.
        cause: SelectionCause,
    },
    /// A deferred selection of `target` was armed for `deadline`.
    SettleScheduled {
        /// Page the deferred selection will move to.
        target: PageId,
        /// Tick at which it fires.
        deadline: u64,
    },
    /// A pending deferred selection of `target` was dropped before firing.
    SettleDiscarded {
        /// Page the discarded selection would have moved to.
        target: PageId,
    },
    /// The layout axis changed.
    AxisChanged(Axis),
}
