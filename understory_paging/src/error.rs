// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PageId;

/// Input validation failures of paging commands.
///
/// Rendering layers normally rule these out by construction (they only offer
/// indices and ids they got from the controller), so seeing one usually means a
/// caller bug.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PagingError {
    /// The index is outside `[0, append_slot]`.
    #[error("page index {index} is out of range (valid: 0..={append_slot})")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The largest valid index, i.e. the current page count.
        append_slot: usize,
    },
    /// No page with this id is in the sequence.
    #[error("no page with id {0}")]
    UnknownPage(PageId),
}
