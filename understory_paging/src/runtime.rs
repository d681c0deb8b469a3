// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tokio driver for [`PagingController`].
//!
//! [`AsyncPaging`] owns a controller and arms one tokio timer per append, so
//! the deferred selection fires without the host calling
//! [`PagingController::advance`]. Ticks are milliseconds since the wrapper was
//! created, measured with [`tokio::time::Instant`], which means tests can run
//! under a paused clock.
//!
//! Observers get two channels: [`AsyncPaging::subscribe`] for the latest
//! selection and [`AsyncPaging::subscribe_events`] for every [`PagingEvent`].
//! The controller's own event queue is drained into the latter after each
//! command, so it never grows past one command's worth of events.
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! use understory_paging::runtime::AsyncPaging;
//! use understory_paging::{ActiveSelection, PagingConfig};
//!
//! let pager = AsyncPaging::new(PagingConfig::default(), ["Card 1", "Card 2"]);
//! let mut changes = pager.subscribe();
//!
//! pager.append_page("Card 3");
//! changes.changed().await.unwrap();
//! assert_eq!(*changes.borrow(), ActiveSelection::Index(Some(2)));
//! # }
//! ```

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::{
    ActiveSelection, Axis, PageId, PagingConfig, PagingController, PagingError, PagingEvent,
};

/// Number of events a lagging [`AsyncPaging::subscribe_events`] receiver can
/// fall behind before it starts missing the oldest ones.
pub const EVENT_CAPACITY: usize = 64;

/// The controller and its settle task live under one lock, so the task that is
/// armed always belongs to the latest append.
struct State<T> {
    controller: PagingController<T>,
    settle_task: Option<JoinHandle<()>>,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    epoch: Instant,
    selection: watch::Sender<ActiveSelection>,
    events: broadcast::Sender<PagingEvent>,
}

impl<T> Shared<T> {
    fn now(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn instant_at(&self, deadline: u64) -> Instant {
        self.epoch + Duration::from_millis(deadline)
    }

    /// Hands accumulated events and the current selection to observers.
    fn flush(&self, controller: &mut PagingController<T>) {
        for event in controller.drain_events() {
            // No receivers is fine; the event is simply not observed.
            let _ = self.events.send(event);
        }
        let selection = controller.current_selection();
        self.selection.send_if_modified(|current| {
            if *current == selection {
                return false;
            }
            *current = selection;
            true
        });
    }
}

/// A [`PagingController`] driven by tokio timers.
///
/// Commands take `&self`, so the wrapper can be shared behind an `Arc` between
/// the tasks that feed it gestures. The controller itself stays single-writer:
/// every command runs under one lock.
///
/// Dropping the wrapper aborts any settle task still waiting; a task that is
/// already waking up finds the controller gone and does nothing.
pub struct AsyncPaging<T> {
    shared: Arc<Shared<T>>,
}

impl<T> core::fmt::Debug for AsyncPaging<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let settle_armed = self
            .shared
            .state
            .lock()
            .settle_task
            .as_ref()
            .is_some_and(|task| !task.is_finished());
        f.debug_struct("AsyncPaging")
            .field("selection", &*self.shared.selection.borrow())
            .field("settle_armed", &settle_armed)
            .finish_non_exhaustive()
    }
}

impl<T> AsyncPaging<T>
where
    T: Send + 'static,
{
    /// Creates a wrapper around a new controller over `payloads`.
    pub fn new<I>(config: PagingConfig, payloads: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let controller = PagingController::new(config, payloads);
        let (selection, _) = watch::channel(controller.current_selection());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    controller,
                    settle_task: None,
                }),
                epoch: Instant::now(),
                selection,
                events,
            }),
        }
    }

    /// Returns a receiver that observes every change of the active selection.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ActiveSelection> {
        self.shared.selection.subscribe()
    }

    /// Returns a receiver for the controller's [`PagingEvent`]s.
    ///
    /// Only events emitted after subscribing are delivered. A receiver that
    /// falls more than [`EVENT_CAPACITY`] events behind gets
    /// [`broadcast::error::RecvError::Lagged`].
    #[must_use]
    pub fn subscribe_events(&self) -> broadcast::Receiver<PagingEvent> {
        self.shared.events.subscribe()
    }

    /// Returns the active selection.
    #[must_use]
    pub fn current_selection(&self) -> ActiveSelection {
        self.shared.state.lock().controller.current_selection()
    }

    /// Runs `f` with shared access to the controller.
    pub fn with_controller<R>(&self, f: impl FnOnce(&PagingController<T>) -> R) -> R {
        f(&self.shared.state.lock().controller)
    }

    /// See [`PagingController::select_by_index`].
    pub fn select_by_index(&self, index: usize) -> Result<(), PagingError> {
        self.command(|controller| controller.select_by_index(index))
    }

    /// See [`PagingController::select_by_identity`].
    pub fn select_by_identity(&self, id: PageId) -> Result<(), PagingError> {
        self.command(|controller| controller.select_by_identity(id))
    }

    /// See [`PagingController::clear_selection`].
    pub fn clear_selection(&self) {
        self.command(PagingController::clear_selection);
    }

    /// See [`PagingController::select_at_offset`].
    pub fn select_at_offset(&self, offset: f64, page_extent: f64) -> Option<usize> {
        self.command(|controller| controller.select_at_offset(offset, page_extent))
    }

    /// See [`PagingController::replace_payload`].
    pub fn replace_payload(&self, id: PageId, payload: T) -> Result<T, PagingError> {
        self.command(|controller| controller.replace_payload(id, payload))
    }

    /// See [`PagingController::set_axis`].
    pub fn set_axis(&self, axis: Axis) {
        self.command(|controller| controller.set_axis(axis));
    }

    /// See [`PagingController::toggle_axis`].
    pub fn toggle_axis(&self) {
        self.command(PagingController::toggle_axis);
    }

    /// Appends a page and arms a tokio timer for its deferred selection.
    ///
    /// The timer of an earlier append that has not fired yet is aborted.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn append_page(&self, payload: T) -> PageId {
        let now = self.shared.now();
        let mut state = self.shared.state.lock();
        let id = state.controller.append_page(now, payload);
        if let Some(deadline) = state.controller.next_deadline() {
            trace!(deadline, "arming settle timer");
            let wake_at = self.shared.instant_at(deadline);
            let task = tokio::spawn(settle(Arc::downgrade(&self.shared), wake_at));
            if let Some(previous) = state.settle_task.replace(task) {
                debug!("aborting superseded settle timer");
                previous.abort();
            }
        }
        self.shared.flush(&mut state.controller);
        id
    }

    /// Discards the pending deferred selection and aborts its timer.
    pub fn cancel_pending_selection(&self) -> bool {
        let mut state = self.shared.state.lock();
        if let Some(task) = state.settle_task.take() {
            task.abort();
        }
        let cancelled = state.controller.cancel_pending_selection();
        self.shared.flush(&mut state.controller);
        cancelled
    }

    fn command<R>(&self, f: impl FnOnce(&mut PagingController<T>) -> R) -> R {
        let mut state = self.shared.state.lock();
        let result = f(&mut state.controller);
        self.shared.flush(&mut state.controller);
        result
    }
}

/// Sleeps until `wake_at`, then applies whatever is due.
///
/// If the controller still has a later deadline after that (a settle armed
/// after this task's deadline was computed), the task sleeps again instead of
/// leaving it stranded.
async fn settle<T>(shared: Weak<Shared<T>>, mut wake_at: Instant) {
    loop {
        tokio::time::sleep_until(wake_at).await;
        let next = {
            let Some(shared) = shared.upgrade() else {
                trace!("pager dropped before settle");
                return;
            };
            let now = shared.now();
            let mut state = shared.state.lock();
            if let Some(selection) = state.controller.advance(now) {
                debug!(?selection, "settled on appended page");
            }
            shared.flush(&mut state.controller);
            state
                .controller
                .next_deadline()
                .map(|deadline| shared.instant_at(deadline))
        };
        match next {
            Some(next) => wake_at = next,
            None => return,
        }
    }
}

impl<T> Drop for AsyncPaging<T> {
    fn drop(&mut self) {
        if let Some(task) = self.shared.state.lock().settle_task.take() {
            task.abort();
        }
    }
}
