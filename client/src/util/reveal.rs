//! Entrance animation for sections.
//!
//! Each animated section owns a [`Visibility`] flag that starts `Hidden` and
//! flips to `Visible` once, [`REVEAL_DELAY_MS`] after mount. The flag never
//! goes back; a fresh mount starts hidden again. The timer is owned by the
//! mounting component and cancelled on cleanup.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

use super::timer::ScopedTimeout;

/// Delay between mount and the section fading in.
pub const REVEAL_DELAY_MS: u32 = 100;

/// Two-state entrance flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    /// Transition taken when the reveal timer fires. `Visible` is terminal.
    #[must_use]
    pub fn reveal(self) -> Self {
        match self {
            Visibility::Hidden | Visibility::Visible => Visibility::Visible,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// CSS classes driving the opacity/translate transition.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Visibility::Hidden => "reveal reveal--hidden",
            Visibility::Visible => "reveal reveal--visible",
        }
    }
}

/// Start the timer that flips `flag` to visible after `delay_ms`.
///
/// The returned guard must live as long as the owning component; releasing
/// it before the delay means `flag` is never touched.
pub fn schedule_reveal(flag: RwSignal<Visibility>, delay_ms: u32) -> ScopedTimeout {
    ScopedTimeout::start(delay_ms, move || {
        // `try_update` is a no-op if the owner was already disposed.
        flag.try_update(|v| *v = v.reveal());
    })
}

/// Pending reveal timer for one mount of an animated section.
///
/// Owns at most one [`ScopedTimeout`]. Creating a slot registers a cleanup on
/// the current owner, so disposing the section cancels whatever is pending.
#[derive(Clone, Copy)]
struct RevealSlot {
    flag: RwSignal<Visibility>,
    timer: StoredValue<Option<ScopedTimeout>, LocalStorage>,
}

impl RevealSlot {
    fn new(flag: RwSignal<Visibility>) -> Self {
        let slot = Self { flag, timer: StoredValue::new_local(None) };
        on_cleanup(move || slot.disarm());
        slot
    }

    /// Schedule the reveal. Any timer already pending is swapped out and
    /// cancelled, so a slot never holds more than one.
    fn arm(self) {
        let flag = self.flag;
        let replaced = self.timer.try_update_value(|t| t.replace(schedule_reveal(flag, REVEAL_DELAY_MS)));
        if let Some(Some(previous)) = replaced {
            previous.cancel();
        }
    }

    fn disarm(self) {
        if let Some(Some(pending)) = self.timer.try_update_value(Option::take) {
            pending.cancel();
        }
    }

    #[cfg(all(test, not(feature = "hydrate")))]
    fn elapse(self) -> bool {
        self.timer.try_update_value(|t| t.as_mut().is_some_and(ScopedTimeout::elapse)).unwrap_or(false)
    }
}

/// Per-mount visibility flag for an animated section.
pub fn use_reveal() -> ReadSignal<Visibility> {
    let flag = RwSignal::new(Visibility::Hidden);
    let slot = RevealSlot::new(flag);

    // Effects only run after mount in the browser, so SSR output stays hidden
    // and hydration starts from the same state.
    Effect::new(move || slot.arm());

    flag.read_only()
}
