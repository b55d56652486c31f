//! Toast Component
//!
//! Transient success/error message plus the single slot that owns its
//! dismissal timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::state::notice::{Notice, NOTICE_DURATION_MS};

/// One-shot timer that hides a notice. Dropping the handle cancels it.
pub trait DismissTimer: 'static {
    fn start(millis: u32, on_fire: impl FnOnce() + 'static) -> Self;
}

impl DismissTimer for Timeout {
    fn start(millis: u32, on_fire: impl FnOnce() + 'static) -> Self {
        Timeout::new(millis, on_fire)
    }
}

/// Holds at most one visible notice.
///
/// Replacing the stored timer (or disposing the slot's owner) drops the old
/// one. Each timer also only clears the notice it was started for.
pub struct NoticeSlot<T = Timeout> {
    current: RwSignal<Option<Notice>>,
    /// Bumped on every `show`
    shown: StoredValue<u64>,
    timer: StoredValue<Option<T>, LocalStorage>,
}

impl<T> Clone for NoticeSlot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NoticeSlot<T> {}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::with_timer()
    }
}

impl<T: DismissTimer> NoticeSlot<T> {
    pub fn with_timer() -> Self {
        let slot = Self {
            current: RwSignal::new(None),
            shown: StoredValue::new(0),
            timer: StoredValue::new_local(None),
        };
        on_cleanup(move || {
            slot.timer.try_update_value(|timer| timer.take());
        });
        slot
    }

    /// Notice on screen, if any (tracked)
    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    /// Show `notice` now, replacing any visible one and restarting the timer
    pub fn show(&self, notice: Notice) {
        log::debug!("toast: {:?} {}", notice.kind, notice.message);
        let Some(ticket) = self.shown.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        let (current, shown) = (self.current, self.shown);
        current.set(Some(notice));
        let timer = T::start(NOTICE_DURATION_MS, move || {
            if shown.try_get_value() == Some(ticket) {
                current.try_set(None);
            }
        });
        self.timer.set_value(Some(timer));
    }
}

/// Stateless toast display
#[component]
pub fn Toast(notice: Notice) -> impl IntoView {
    view! {
        <div class="toast-container">
            <div class=notice.css_class() role="status">
                <span class="toast-icon">{notice.icon()}</span>
                <span class="toast-message">{notice.message.clone()}</span>
            </div>
        </div>
    }
}
