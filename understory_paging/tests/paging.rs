// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_paging` crate.
//!
//! These exercise `PagingController<T>` the way a rendering layer drives it:
//! taps on paging dots, scroll gestures that snap to a page, and the
//! "new card" button whose selection settles after a delay.

use understory_paging::{
    ActiveSelection, Axis, DEFAULT_SETTLE_DELAY, IndicatorSlot, PageId, PagingConfig,
    PagingController, PagingError, PagingEvent, SelectionCause, SelectionMode,
};

fn cards() -> PagingController<&'static str> {
    PagingController::with_pages(["Card 1", "Card 2"])
}

fn texts<T: Copy>(pager: &PagingController<T>) -> Vec<T> {
    pager.pages().iter().map(|page| *page.payload()).collect()
}

#[test]
fn index_mode_starts_on_first_page() {
    let pager = cards();
    assert_eq!(pager.mode(), SelectionMode::Index);
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));
    assert_eq!(pager.active_page().map(|p| *p.payload()), Some("Card 1"));
    assert_eq!(pager.revision(), 0);
}

#[test]
fn identity_mode_starts_on_first_page_or_unset() {
    let pager = PagingController::new(
        PagingConfig::with_mode(SelectionMode::Identity),
        ["Card 1", "Card 2"],
    );
    let first = pager.pages()[0].id();
    assert_eq!(
        pager.current_selection(),
        ActiveSelection::Identity(Some(first))
    );

    let empty = PagingController::<&str>::new(
        PagingConfig::with_mode(SelectionMode::Identity),
        [],
    );
    assert!(empty.current_selection().is_unset());
}

#[test]
fn empty_index_pager_starts_on_append_slot() {
    let pager = PagingController::<&str>::with_pages([]);
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));
    assert!(pager.is_append_slot_active());
    assert!(pager.active_page().is_none());
}

#[test]
fn every_valid_index_round_trips() {
    let mut pager = cards();
    for index in 0..=pager.len() {
        pager.select_by_index(index).unwrap();
        assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(index)));
    }
    assert!(pager.is_append_slot_active());
}

#[test]
fn index_past_append_slot_is_out_of_range() {
    let mut pager = cards();
    pager.select_by_index(1).unwrap();

    let err = pager.select_by_index(pager.len() + 1).unwrap_err();
    assert_eq!(
        err,
        PagingError::OutOfRange {
            index: 3,
            append_slot: 2,
        }
    );
    // Failed commands leave the selection alone.
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(1)));
}

#[test]
fn unknown_identity_is_rejected() {
    let mut pager = PagingController::new(
        PagingConfig::with_mode(SelectionMode::Identity),
        ["Card 1", "Card 2"],
    );
    // Ids come from a different controller.
    let foreign = {
        let mut other = PagingController::with_pages(["x"; 5]);
        other.append_page(0, "y")
    };
    assert_eq!(
        pager.select_by_identity(foreign),
        Err(PagingError::UnknownPage(foreign))
    );
}

#[test]
fn error_messages_name_the_bad_input() {
    let err = PagingError::OutOfRange {
        index: 9,
        append_slot: 2,
    };
    assert_eq!(
        err.to_string(),
        "page index 9 is out of range (valid: 0..=2)"
    );
}

#[test]
fn append_keeps_selection_until_settle() {
    let mut pager = cards();
    let id = pager.append_page(0, "Card 3");

    assert_eq!(texts(&pager), ["Card 1", "Card 2", "Card 3"]);
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));
    assert_eq!(pager.pending_selection(), Some(id));
    assert_eq!(pager.next_deadline(), Some(DEFAULT_SETTLE_DELAY));

    assert_eq!(pager.advance(DEFAULT_SETTLE_DELAY - 1), None);
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));

    assert_eq!(
        pager.advance(DEFAULT_SETTLE_DELAY),
        Some(ActiveSelection::Index(Some(2)))
    );
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(2)));
    assert_eq!(pager.pending_selection(), None);
    assert_eq!(pager.next_deadline(), None);

    // Settle fires once.
    assert_eq!(pager.advance(DEFAULT_SETTLE_DELAY * 10), None);
}

#[test]
fn rapid_appends_only_latest_settles() {
    let mut pager = cards();
    pager.append_page(0, "A");
    let b = pager.append_page(500, "B");

    // The first append's deadline passes without effect.
    assert_eq!(pager.advance(1_500), None);
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));

    let b_index = pager.position_of(b).unwrap();
    assert_eq!(b_index, 3);
    assert_eq!(
        pager.advance(2_000),
        Some(ActiveSelection::Index(Some(b_index)))
    );
}

#[test]
fn rapid_appends_discard_older_settle_in_events() {
    let mut pager = cards();
    let a = pager.append_page(0, "A");
    pager.append_page(10, "B");

    let discarded: Vec<_> = pager
        .drain_events()
        .filter_map(|event| match event {
            PagingEvent::SettleDiscarded { target } => Some(target),
            _ => None,
        })
        .collect();
    assert_eq!(discarded, [a]);
}

#[test]
fn identity_mode_settles_on_appended_id() {
    let mut pager = PagingController::new(
        PagingConfig {
            mode: SelectionMode::Identity,
            settle_delay: 100,
            ..PagingConfig::default()
        },
        ["Card 1"],
    );
    let id = pager.append_page(40, "Card 2");
    assert_eq!(
        pager.advance(140),
        Some(ActiveSelection::Identity(Some(id)))
    );
    assert_eq!(pager.active_index(), Some(1));
}

#[test]
fn explicit_selection_does_not_cancel_settle() {
    let mut pager = cards();
    pager.append_page(0, "Card 3");
    pager.select_by_index(1).unwrap();

    assert_eq!(
        pager.advance(1_500),
        Some(ActiveSelection::Index(Some(2)))
    );
}

#[test]
fn cancel_pending_selection_discards_settle() {
    let mut pager = cards();
    pager.append_page(0, "Card 3");

    assert!(pager.cancel_pending_selection());
    assert!(!pager.cancel_pending_selection());
    assert_eq!(pager.advance(5_000), None);
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));
}

#[test]
fn append_is_order_preserving() {
    let mut pager = PagingController::with_pages(["a", "b", "c"]);
    let before: Vec<PageId> = pager.pages().iter().map(|p| p.id()).collect();

    for (tick, text) in ["d", "e", "f"].into_iter().enumerate() {
        pager.append_page(tick as u64, text);
    }

    let after: Vec<PageId> = pager.pages().iter().map(|p| p.id()).collect();
    assert_eq!(&after[..3], &before[..]);
    assert_eq!(texts(&pager), ["a", "b", "c", "d", "e", "f"]);

    let mut sorted = after.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), after.len(), "page ids must be unique");
}

#[test]
fn append_slot_selection_follows_the_new_page() {
    // Tapping "new card" while the append slot is focused: the index now
    // points at the new page, and settle keeps it there.
    let mut pager = cards();
    pager.select_by_index(2).unwrap();
    pager.append_page(0, "New Card 3");

    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(2)));
    assert!(!pager.is_append_slot_active());
    assert_eq!(pager.advance(1_500), None);
    assert_eq!(pager.pending_selection(), None);
}

#[test]
fn cross_mode_commands_translate() {
    let mut by_index = cards();
    let second = by_index.pages()[1].id();
    by_index.select_by_identity(second).unwrap();
    assert_eq!(by_index.current_selection(), ActiveSelection::Index(Some(1)));

    let mut by_id = PagingController::new(
        PagingConfig::with_mode(SelectionMode::Identity),
        ["Card 1", "Card 2"],
    );
    by_id.select_by_index(1).unwrap();
    assert_eq!(
        by_id.current_selection(),
        ActiveSelection::Identity(Some(second))
    );
    // The append slot has no identity.
    by_id.select_by_index(2).unwrap();
    assert!(by_id.current_selection().is_unset());
}

#[test]
fn no_op_commands_do_not_bump_revision() {
    let mut pager = cards();
    pager.select_by_index(0).unwrap();
    pager.set_axis(pager.axis());
    assert_eq!(pager.revision(), 0);
    assert_eq!(pager.drain_events().count(), 0);

    pager.select_by_index(1).unwrap();
    assert_eq!(pager.revision(), 1);
}

#[test]
fn clear_selection_reports_cause() {
    let mut pager = cards();
    pager.clear_selection();
    assert!(pager.current_selection().is_unset());

    let events: Vec<_> = pager.drain_events().collect();
    assert_eq!(
        events,
        [PagingEvent::SelectionChanged {
            previous: ActiveSelection::Index(Some(0)),
            current: ActiveSelection::Index(None),
            cause: SelectionCause::Cleared,
        }]
    );
}

#[test]
fn replace_payload_returns_previous() {
    let mut pager = cards();
    let id = pager.pages()[0].id();
    assert_eq!(pager.replace_payload(id, "Card One"), Ok("Card 1"));
    assert_eq!(texts(&pager), ["Card One", "Card 2"]);
    // Identity survives replacement.
    assert_eq!(pager.pages()[0].id(), id);
}

#[test]
fn toggle_axis_keeps_pages_and_selection() {
    let mut pager = cards();
    pager.select_by_index(1).unwrap();
    assert_eq!(pager.axis(), Axis::Vertical);

    pager.toggle_axis();
    assert_eq!(pager.axis(), Axis::Horizontal);
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(1)));
    assert_eq!(texts(&pager), ["Card 1", "Card 2"]);
    assert!(
        pager
            .drain_events()
            .any(|event| event == PagingEvent::AxisChanged(Axis::Horizontal))
    );
}

#[test]
fn index_indicators_end_with_one_append_slot() {
    let mut pager = cards();
    pager.select_by_index(2).unwrap();

    let dots: Vec<_> = pager.indicators().collect();
    assert_eq!(dots.len(), 3);
    assert!(matches!(dots[0].slot, IndicatorSlot::Page(_)));
    assert!(matches!(dots[1].slot, IndicatorSlot::Page(_)));
    assert_eq!(dots[2].slot, IndicatorSlot::Append);
    assert_eq!(
        dots.iter().filter(|dot| dot.active).map(|dot| dot.index).collect::<Vec<_>>(),
        [2]
    );
}

#[test]
fn identity_indicators_have_no_append_slot() {
    let pager = PagingController::new(
        PagingConfig::with_mode(SelectionMode::Identity),
        ["Card 1", "Card 2"],
    );
    let dots: Vec<_> = pager.indicators().collect();
    assert_eq!(dots.len(), 2);
    assert!(dots[0].active);
    assert!(!dots[1].active);
}

#[test]
fn scroll_offsets_snap_to_slots() {
    let mut pager = cards();
    assert_eq!(pager.select_at_offset(180.0, 100.0), Some(2));
    assert!(pager.is_append_slot_active());
    assert_eq!(pager.active_offset(100.0), Some(200.0));

    assert_eq!(pager.select_at_offset(-40.0, 100.0), Some(0));
    assert_eq!(pager.current_selection(), ActiveSelection::Index(Some(0)));

    let events: Vec<_> = pager.drain_events().collect();
    assert!(events.iter().all(|event| matches!(
        event,
        PagingEvent::SelectionChanged {
            cause: SelectionCause::Scroll,
            ..
        }
    )));
}

#[test]
fn identity_scroll_on_empty_pager_selects_nothing() {
    let mut pager = PagingController::<&str>::new(
        PagingConfig::with_mode(SelectionMode::Identity),
        [],
    );
    assert_eq!(pager.select_at_offset(0.0, 100.0), None);
    assert_eq!(pager.active_offset(100.0), None);
}
