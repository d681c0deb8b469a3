// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging cards with a host-driven clock.
//!
//! Scripts the gestures of a card pager (tap a dot, swipe, tap "new card",
//! flip the layout axis) and advances a simulated millisecond clock, printing
//! the pager after each step.
//!
//! Run:
//! - `cargo run -p understory_demos --example paging_cards`
//! - `RUST_LOG=understory_paging=debug cargo run -p understory_demos --example paging_cards`

use understory_demos::{init_tracing, render};
use understory_paging::{PagingConfig, PagingController};

const CONFIG: &str = r#"{ "mode": "Index", "axis": "Horizontal" }"#;

fn main() {
    init_tracing();

    let config: PagingConfig = match serde_json::from_str(CONFIG) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid pager config, using defaults");
            PagingConfig::default()
        }
    };
    let mut pager = PagingController::new(config, ["Card 1".to_owned(), "Card 2".to_owned()]);
    let mut now = 0_u64;

    println!("Start:\n{}", render(&pager));

    pager.select_by_index(1).expect("index 1 exists");
    println!("Tap second dot:\n{}", render(&pager));

    // A swipe that ends most of the way onto the "new card" slot.
    pager.select_at_offset(730.0, 390.0);
    println!("Swipe to the end:\n{}", render(&pager));

    let text = format!("New Card {}", pager.len() + 1);
    pager.append_page(now, text);
    println!("Tap \"New Card\" (t={now}ms):\n{}", render(&pager));

    while let Some(deadline) = pager.next_deadline() {
        now = deadline;
        if let Some(selection) = pager.advance(now) {
            println!("Settled at t={now}ms on {selection:?}:\n{}", render(&pager));
        }
    }

    pager.toggle_axis();
    println!("Flip to {:?}:\n{}", pager.axis(), render(&pager));

    for event in pager.drain_events() {
        tracing::info!(?event, "pager event");
    }
}
