//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::MenuApi;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<Arc<dyn MenuApi>>,
    /// Bumped to make the menu list re-fetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to make the menu list re-fetch - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(api: Arc<dyn MenuApi>) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            api: StoredValue::new(api),
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Menu API handle
    pub fn api(&self) -> Arc<dyn MenuApi> {
        self.api.get_value()
    }

    /// Invalidate the menu list: it drops its items and fetches from scratch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
