// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Stable identifier of a [`Page`].
///
/// Ids are allocated by the owning [`PagingController`](crate::PagingController)
/// from a monotonic counter and are never reused within that controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageId(pub(crate) u64);

impl PageId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page#{}", self.0)
    }
}

/// One paged unit of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    id: PageId,
    payload: T,
}

impl<T> Page<T> {
    pub(crate) const fn new(id: PageId, payload: T) -> Self {
        Self { id, payload }
    }

    /// Returns the page id.
    #[must_use]
    pub const fn id(&self) -> PageId {
        self.id
    }

    /// Returns the display payload.
    #[must_use]
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    pub(crate) fn replace_payload(&mut self, payload: T) -> T {
        core::mem::replace(&mut self.payload, payload)
    }
}
