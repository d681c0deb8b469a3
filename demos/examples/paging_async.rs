// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging cards on tokio.
//!
//! Uses `AsyncPaging`, which arms a tokio timer per append. Two "new card"
//! taps arrive in quick succession; only the second one settles. A watcher
//! task re-renders whenever the selection changes.
//!
//! Run:
//! - `cargo run -p understory_demos --example paging_async`

use std::sync::Arc;
use std::time::Duration;

use understory_demos::{init_tracing, render};
use understory_paging::runtime::AsyncPaging;
use understory_paging::{PagingConfig, SelectionMode};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let pager = Arc::new(AsyncPaging::new(
        PagingConfig::with_mode(SelectionMode::Identity),
        ["Card 1".to_owned(), "Card 2".to_owned()],
    ));

    let mut changes = pager.subscribe();
    let watched = Arc::clone(&pager);
    let watcher = tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let selection = *changes.borrow_and_update();
            let frame = watched.with_controller(render);
            println!("Selection changed to {selection:?}:\n{frame}");
        }
    });

    println!("Start:\n{}", pager.with_controller(render));

    pager.append_page("New Card 3".to_owned());
    tokio::time::sleep(Duration::from_millis(300)).await;
    let last = pager.append_page("New Card 4".to_owned());
    tracing::info!(%last, "appended twice; waiting for settle");

    tokio::time::sleep(Duration::from_secs(2)).await;
    drop(pager);
    watcher.abort();
}
