// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the store, the lifecycle controllers and the overlay.
//!
//! Time is driven with synthetic `Instant`s handed to `Overlay::tick`, so no
//! test sleeps.

use iced_toast::ui::notifications::{
    ActionResponse, Message, Notification, NotificationId, NotificationOptions,
    NotificationStore, Overlay, TransitionWindow, Variant, VisualState,
};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{Duration, Instant};

const WINDOW_MS: u64 = 250;

fn window() -> TransitionWindow {
    TransitionWindow::from_millis(WINDOW_MS)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn ids(store: &NotificationStore) -> Vec<NotificationId> {
    store.snapshot().iter().map(Notification::id).collect()
}

#[test]
fn saved_and_oops_scenario() {
    let store = NotificationStore::new();
    let mut overlay = Overlay::new(store.clone(), window());
    let t0 = Instant::now();

    let saved = store
        .add(
            NotificationOptions::new("Saved")
                .variant(Variant::Success)
                .duration_ms(0),
        )
        .unwrap();
    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].message(), "Saved");
    assert_eq!(snapshot[0].variant(), Variant::Success);

    let oops = store
        .add(
            NotificationOptions::new("Oops")
                .variant(Variant::Error)
                .duration_ms(3000),
        )
        .unwrap();
    assert_eq!(ids(&store), vec![saved, oops]);

    overlay.sync(t0);
    overlay.tick(t0 + ms(3000));
    assert_eq!(overlay.visual_state(oops), Some(VisualState::Exiting));
    overlay.tick(t0 + ms(3000 + WINDOW_MS));

    assert_eq!(ids(&store), vec![saved]);
}

#[test]
fn rapid_adds_yield_distinct_ids_in_call_order() {
    let store = NotificationStore::new();

    let first = store.add(NotificationOptions::new("one")).unwrap();
    let second = store.add(NotificationOptions::new("two")).unwrap();

    assert_ne!(first, second);
    assert_eq!(ids(&store), vec![first, second]);
}

#[test]
fn many_adds_never_collide() {
    let store = NotificationStore::new();
    let mut seen = HashSet::new();

    for i in 0..500 {
        let id = store.add(NotificationOptions::new(format!("#{i}"))).unwrap();
        assert!(seen.insert(id), "id {id} was handed out twice");
        if i % 3 == 0 {
            store.remove(id);
        }
    }
}

#[test]
fn remove_all_on_three_records_closes_each_once() {
    let store = NotificationStore::new();
    let closes: Rc<RefCell<Vec<NotificationId>>> = Rc::new(RefCell::new(Vec::new()));

    let mut added = Vec::new();
    for name in ["a", "b", "c"] {
        let log = Rc::clone(&closes);
        let slot = Rc::new(Cell::new(None));
        let id_slot = Rc::clone(&slot);
        let id = store
            .add(NotificationOptions::new(name).on_close(move || {
                if let Some(id) = id_slot.get() {
                    log.borrow_mut().push(id);
                }
            }))
            .unwrap();
        slot.set(Some(id));
        added.push(id);
    }

    store.remove_all();

    assert!(store.snapshot().is_empty());
    assert_eq!(*closes.borrow(), added);
}

#[test]
fn removing_absent_id_changes_nothing() {
    let store = NotificationStore::new();
    let kept = store.add(NotificationOptions::new("keep")).unwrap();
    let removed = store.add(NotificationOptions::new("gone")).unwrap();
    store.remove(removed);

    let notified = Rc::new(Cell::new(0));
    let sink = Rc::clone(&notified);
    let _subscription = store.subscribe(move |_| sink.set(sink.get() + 1));

    assert!(!store.remove(removed));
    assert!(!store.remove(NotificationId::from_raw(10_000)));

    assert_eq!(ids(&store), vec![kept]);
    assert_eq!(notified.get(), 0);
}

#[test]
fn add_then_remove_closes_once_and_disappears() {
    let store = NotificationStore::new();
    let closed = Rc::new(Cell::new(0));
    let sink = Rc::clone(&closed);
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let sizes_sink = Rc::clone(&sizes);
    let _subscription = store.subscribe(move |snapshot| sizes_sink.borrow_mut().push(snapshot.len()));

    let id = store
        .add(NotificationOptions::new("blink").on_close(move || sink.set(sink.get() + 1)))
        .unwrap();
    store.remove(id);

    assert!(!store.contains(id));
    assert_eq!(closed.get(), 1);
    assert_eq!(*sizes.borrow(), vec![1, 0]);
}

#[test]
fn sticky_notification_survives_any_wait() {
    let store = NotificationStore::new();
    let mut overlay = Overlay::new(store.clone(), window());
    let t0 = Instant::now();
    let id = store.add(NotificationOptions::new("stay").duration_ms(0)).unwrap();
    overlay.sync(t0);

    for hours in [1, 24, 24 * 30] {
        overlay.tick(t0 + Duration::from_secs(hours * 3600));
    }

    assert!(store.contains(id));
    assert_eq!(overlay.visual_state(id), Some(VisualState::Visible));
}

#[test]
fn timed_notification_respects_duration_and_window() {
    let store = NotificationStore::new();
    let mut overlay = Overlay::new(store.clone(), window());
    let t0 = Instant::now();
    let id = store.add(NotificationOptions::new("timed").duration_ms(1200)).unwrap();
    overlay.sync(t0);

    overlay.tick(t0 + ms(1199));
    assert_eq!(overlay.visual_state(id), Some(VisualState::Visible));

    overlay.tick(t0 + ms(1200));
    assert_eq!(overlay.visual_state(id), Some(VisualState::Exiting));

    overlay.tick(t0 + ms(1200 + WINDOW_MS - 1));
    assert!(store.contains(id));

    overlay.tick(t0 + ms(1200 + WINDOW_MS));
    assert!(!store.contains(id));
}

#[test]
fn late_tick_still_gets_full_exit_window() {
    let store = NotificationStore::new();
    let mut overlay = Overlay::new(store.clone(), window());
    let t0 = Instant::now();
    let id = store.add(NotificationOptions::new("late").duration_ms(100)).unwrap();
    overlay.sync(t0);

    // A single tick far past the deadline starts the exit only; the window
    // counts from when the exit actually began.
    overlay.tick(t0 + ms(10_000));
    assert_eq!(overlay.visual_state(id), Some(VisualState::Exiting));

    overlay.tick(t0 + ms(10_000 + WINDOW_MS));
    assert!(!store.contains(id));
}

#[test]
fn unsubscribe_only_affects_that_subscriber() {
    let store = NotificationStore::new();
    let a = Rc::new(Cell::new(0));
    let b = Rc::new(Cell::new(0));
    let a_sink = Rc::clone(&a);
    let b_sink = Rc::clone(&b);
    let sub_a = store.subscribe(move |_| a_sink.set(a_sink.get() + 1));
    let _sub_b = store.subscribe(move |_| b_sink.set(b_sink.get() + 1));

    store.add(NotificationOptions::new("1")).unwrap();
    sub_a.unsubscribe();
    store.add(NotificationOptions::new("2")).unwrap();
    store.remove_all();

    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 3);
}

#[test]
fn close_click_racing_timeout_removes_once() {
    let store = NotificationStore::new();
    let mut overlay = Overlay::new(store.clone(), window());
    let t0 = Instant::now();
    let closed = Rc::new(Cell::new(0));
    let sink = Rc::clone(&closed);
    let id = store
        .add(
            NotificationOptions::new("race")
                .duration_ms(500)
                .on_close(move || sink.set(sink.get() + 1)),
        )
        .unwrap();
    overlay.sync(t0);

    overlay.handle_message(&Message::Close(id), t0 + ms(499));
    overlay.tick(t0 + ms(500));
    overlay.handle_message(&Message::Close(id), t0 + ms(600));
    overlay.tick(t0 + ms(499 + WINDOW_MS));

    assert!(!store.contains(id));
    assert_eq!(closed.get(), 1);
}

#[test]
fn overlay_mounted_late_renders_existing_records() {
    let store = NotificationStore::new();
    let first = store.add(NotificationOptions::new("before")).unwrap();

    let mut overlay = Overlay::new(store.clone(), window());
    let second = store.add(NotificationOptions::new("after")).unwrap();
    overlay.sync(Instant::now());

    assert_eq!(overlay.len(), 2);
    assert_eq!(overlay.visual_state(first), Some(VisualState::Visible));
    assert_eq!(overlay.visual_state(second), Some(VisualState::Visible));
}

#[test]
fn on_close_can_chain_a_follow_up_toast() {
    let store = NotificationStore::new();
    let mut overlay = Overlay::new(store.clone(), window());
    let t0 = Instant::now();
    let issuer = store.clone();
    store
        .add(
            NotificationOptions::new("upload finished")
                .duration_ms(100)
                .on_close(move || {
                    issuer
                        .add(NotificationOptions::info("next step").sticky())
                        .expect("follow-up should be accepted");
                }),
        )
        .unwrap();
    overlay.sync(t0);

    overlay.tick(t0 + ms(100));
    overlay.tick(t0 + ms(100 + WINDOW_MS));

    let messages: Vec<String> = store
        .snapshot()
        .iter()
        .map(|n| n.message().to_string())
        .collect();
    assert_eq!(messages, vec!["next step".to_string()]);
    assert_eq!(overlay.len(), 1);
}

#[test]
fn default_action_leaves_toast_open() {
    let store = NotificationStore::new();
    let mut overlay = Overlay::new(store.clone(), window());
    let t0 = Instant::now();
    let id = store
        .add(NotificationOptions::new("upload failed").sticky().action("Retry", || {}))
        .unwrap();
    overlay.sync(t0);

    overlay.handle_message(&Message::Action(id), t0);
    assert_eq!(overlay.visual_state(id), Some(VisualState::Visible));

    overlay.tick(t0 + ms(WINDOW_MS + 50));
    assert!(store.contains(id));
    assert_eq!(overlay.visual_state(id), Some(VisualState::Visible));
}

#[test]
fn action_callback_can_choose_to_close() {
    let store = NotificationStore::new();
    let mut overlay = Overlay::new(store.clone(), window());
    let t0 = Instant::now();
    let id = store
        .add(
            NotificationOptions::new("item archived")
                .sticky()
                .action_with("Undo", || ActionResponse::Close),
        )
        .unwrap();
    overlay.sync(t0);

    overlay.handle_message(&Message::Action(id), t0);
    assert_eq!(overlay.visual_state(id), Some(VisualState::Exiting));

    overlay.tick(t0 + ms(WINDOW_MS));
    assert!(!store.contains(id));
}
