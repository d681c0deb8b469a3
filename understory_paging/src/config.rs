// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::SelectionMode;

/// Default delay, in ticks, between an append and the deferred selection of
/// the new page. With millisecond ticks this is 1.5 seconds.
pub const DEFAULT_SETTLE_DELAY: u64 = 1_500;

/// Layout axis of the pager.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Pages laid out left to right.
    Horizontal,
    /// Pages stacked top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the other axis.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Construction-time settings of a [`PagingController`](crate::PagingController).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagingConfig {
    /// Selection representation; fixed for the controller's lifetime.
    pub mode: SelectionMode,
    /// Initial layout axis.
    pub axis: Axis,
    /// Ticks between an append and its deferred selection.
    pub settle_delay: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Index,
            axis: Axis::default(),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl PagingConfig {
    /// Returns a config with the given selection mode and default settings.
    #[must_use]
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
