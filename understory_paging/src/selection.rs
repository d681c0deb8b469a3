// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PageId;

/// How a controller represents its active page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Positional index into the page sequence, including the append slot.
    #[default]
    Index,
    /// Page identity. The append slot cannot be expressed in this mode.
    Identity,
}

/// The currently active page, in the representation of the controller's mode.
///
/// `None` in either variant is the "unset" state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActiveSelection {
    /// Index into `[0, len]`, where `len` is the append slot.
    Index(Option<usize>),
    /// Identity of a page currently in the sequence.
    Identity(Option<PageId>),
}

impl ActiveSelection {
    pub(crate) const fn unset(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Index => Self::Index(None),
            SelectionMode::Identity => Self::Identity(None),
        }
    }

    /// Returns the mode this selection is expressed in.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Index(_) => SelectionMode::Index,
            Self::Identity(_) => SelectionMode::Identity,
        }
    }

    /// Returns the index, if this is a set index selection.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match *self {
            Self::Index(index) => index,
            Self::Identity(_) => None,
        }
    }

    /// Returns the page id, if this is a set identity selection.
    #[must_use]
    pub const fn identity(&self) -> Option<PageId> {
        match *self {
            Self::Identity(id) => id,
            Self::Index(_) => None,
        }
    }

    /// Returns `true` for the "unset" state.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Index(None) | Self::Identity(None))
    }
}
