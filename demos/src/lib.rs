// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the paging demos: a plain-text renderer standing in for
//! a real UI, and tracing setup.

use std::fmt::{Display, Write as _};

use tracing_subscriber::EnvFilter;
use understory_paging::{Axis, IndicatorSlot, PagingController};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Renders the pager as text: the active card, then the paging control.
///
/// The paging control runs along the axis, so a vertical pager lists its dots
/// one per line.
pub fn render<T: Display>(pager: &PagingController<T>) -> String {
    let mut out = String::new();
    match pager.active_page() {
        Some(page) => {
            let _ = writeln!(out, "+----------------+");
            let _ = writeln!(out, "| {:<14} |", page.payload());
            let _ = writeln!(out, "+----------------+");
        }
        None if pager.is_append_slot_active() => {
            let _ = writeln!(out, "+----------------+");
            let _ = writeln!(out, "| {:<14} |", "+ New Card");
            let _ = writeln!(out, "+----------------+");
        }
        None => {
            let _ = writeln!(out, "(no card selected)");
        }
    }

    let separator = match pager.axis() {
        Axis::Horizontal => " ",
        Axis::Vertical => "\n",
    };
    let dots: Vec<&str> = pager
        .indicators()
        .map(|dot| match (dot.slot, dot.active) {
            (IndicatorSlot::Page(_), true) => "(*)",
            (IndicatorSlot::Page(_), false) => "( )",
            (IndicatorSlot::Append, true) => "[+]",
            (IndicatorSlot::Append, false) => "(+)",
        })
        .collect();
    out.push_str(&dots.join(separator));
    out.push('\n');
    out
}
