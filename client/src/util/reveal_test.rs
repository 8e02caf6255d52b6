#![cfg(not(feature = "hydrate"))]

use super::*;
use leptos::prelude::*;

// =============================================================
// Visibility state machine
// =============================================================

#[test]
fn default_is_hidden() {
    assert_eq!(Visibility::default(), Visibility::Hidden);
    assert!(!Visibility::default().is_visible());
}

#[test]
fn reveal_moves_hidden_to_visible() {
    assert_eq!(Visibility::Hidden.reveal(), Visibility::Visible);
}

#[test]
fn visible_is_terminal() {
    let mut v = Visibility::Visible;
    for _ in 0..3 {
        v = v.reveal();
        assert_eq!(v, Visibility::Visible);
    }
}

#[test]
fn class_is_a_function_of_the_flag() {
    assert_eq!(Visibility::Hidden.class(), "reveal reveal--hidden");
    assert_eq!(Visibility::Visible.class(), "reveal reveal--visible");
}

// =============================================================
// schedule_reveal
// =============================================================

#[test]
fn flag_stays_hidden_until_timer_fires() {
    let flag = RwSignal::new(Visibility::Hidden);
    let mut timer = schedule_reveal(flag, REVEAL_DELAY_MS);
    assert_eq!(flag.get_untracked(), Visibility::Hidden);

    assert!(timer.elapse());
    assert_eq!(flag.get_untracked(), Visibility::Visible);
}

#[test]
fn timer_fires_at_most_once() {
    let flag = RwSignal::new(Visibility::Hidden);
    let mut timer = schedule_reveal(flag, REVEAL_DELAY_MS);
    assert!(timer.elapse());
    assert!(!timer.elapse());
    assert_eq!(flag.get_untracked(), Visibility::Visible);
}

#[test]
fn cancelled_timer_never_updates_flag() {
    let flag = RwSignal::new(Visibility::Hidden);
    let timer = schedule_reveal(flag, REVEAL_DELAY_MS);
    timer.cancel();
    assert_eq!(flag.get_untracked(), Visibility::Hidden);
}

#[test]
fn dropped_timer_never_updates_flag() {
    let flag = RwSignal::new(Visibility::Hidden);
    drop(schedule_reveal(flag, REVEAL_DELAY_MS));
    assert_eq!(flag.get_untracked(), Visibility::Hidden);
}

#[test]
fn remount_starts_hidden_again() {
    let first = RwSignal::new(Visibility::Hidden);
    let mut timer = schedule_reveal(first, REVEAL_DELAY_MS);
    timer.elapse();
    assert!(first.get_untracked().is_visible());

    let second = RwSignal::new(Visibility::default());
    let _timer = schedule_reveal(second, REVEAL_DELAY_MS);
    assert_eq!(second.get_untracked(), Visibility::Hidden);
}

// =============================================================
// RevealSlot / use_reveal
// =============================================================

#[test]
fn armed_slot_reveals_once() {
    let owner = Owner::new();
    owner.with(|| {
        let flag = RwSignal::new(Visibility::Hidden);
        let slot = RevealSlot::new(flag);
        slot.arm();
        assert_eq!(flag.get_untracked(), Visibility::Hidden);

        assert!(slot.elapse());
        assert!(!slot.elapse());
        assert_eq!(flag.get_untracked(), Visibility::Visible);
    });
}

#[test]
fn rearming_keeps_a_single_pending_timer() {
    let owner = Owner::new();
    owner.with(|| {
        let flag = RwSignal::new(Visibility::Hidden);
        let slot = RevealSlot::new(flag);
        slot.arm();
        slot.arm();

        assert!(slot.elapse());
        assert!(!slot.elapse());
        assert!(flag.get_untracked().is_visible());
    });
}

#[test]
fn disarm_before_delay_leaves_flag_hidden() {
    let owner = Owner::new();
    owner.with(|| {
        let flag = RwSignal::new(Visibility::Hidden);
        let slot = RevealSlot::new(flag);
        slot.arm();
        slot.disarm();

        assert!(!slot.elapse());
        assert_eq!(flag.get_untracked(), Visibility::Hidden);
    });
}

#[test]
fn unmount_before_delay_cancels_pending_reveal() {
    let page = Owner::new();
    let flag = page.with(|| RwSignal::new(Visibility::Hidden));

    let section = page.child();
    let slot = section.with(|| {
        let slot = RevealSlot::new(flag);
        slot.arm();
        slot
    });
    section.cleanup();

    assert!(!slot.elapse());
    assert_eq!(flag.get_untracked(), Visibility::Hidden);
}

#[test]
fn use_reveal_starts_hidden_and_is_disposed_with_its_owner() {
    let owner = Owner::new();
    let flag = owner.with(use_reveal);
    assert_eq!(flag.try_get_untracked(), Some(Visibility::Hidden));

    owner.cleanup();
    assert_eq!(flag.try_get_untracked(), None);
}
