//! Menu List State
//!
//! Loading → Loaded | LoadError, with the delete-confirmation flow on top
//! of `Loaded`.

use crate::error::ApiResult;
use crate::models::MenuItem;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load menu items. Is the backend running?";

/// Items on screen plus the pending delete, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loaded {
    pub items: Vec<MenuItem>,
    /// Item awaiting delete confirmation
    pub delete_target: Option<MenuItem>,
    /// A delete request is in flight
    pub deleting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    Loading,
    Loaded(Loaded),
    LoadError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    phase: ListPhase,
    /// Bumped on every load; only the latest load may land
    ticket: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            phase: ListPhase::Loading,
            ticket: 0,
        }
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading)
    }

    /// Items currently displayed (empty unless loaded)
    pub fn items(&self) -> &[MenuItem] {
        match &self.phase {
            ListPhase::Loaded(loaded) => &loaded.items,
            _ => &[],
        }
    }

    pub fn delete_target(&self) -> Option<&MenuItem> {
        match &self.phase {
            ListPhase::Loaded(loaded) => loaded.delete_target.as_ref(),
            _ => None,
        }
    }

    pub fn is_deleting(&self) -> bool {
        matches!(&self.phase, ListPhase::Loaded(loaded) if loaded.deleting)
    }

    /// Enter `Loading`. Returns the ticket to hand back to [`finish_load`](Self::finish_load).
    pub fn begin_load(&mut self) -> u64 {
        self.ticket += 1;
        self.phase = ListPhase::Loading;
        self.ticket
    }

    /// Apply a list response. Returns false if a newer load superseded it.
    pub fn finish_load(&mut self, ticket: u64, result: ApiResult<Vec<MenuItem>>) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.phase = match result {
            Ok(items) => ListPhase::Loaded(Loaded {
                items,
                ..Default::default()
            }),
            Err(_) => ListPhase::LoadError(LOAD_ERROR_MESSAGE.to_string()),
        };
        true
    }

    /// Ask for confirmation before deleting `item`
    pub fn select_delete(&mut self, item: MenuItem) {
        if let ListPhase::Loaded(loaded) = &mut self.phase {
            if !loaded.deleting {
                loaded.delete_target = Some(item);
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        if let ListPhase::Loaded(loaded) = &mut self.phase {
            if !loaded.deleting {
                loaded.delete_target = None;
            }
        }
    }

    /// Mark the pending delete as in flight and return its id.
    /// `None` when nothing is pending or a delete is already running.
    pub fn begin_delete(&mut self) -> Option<String> {
        match &mut self.phase {
            ListPhase::Loaded(loaded) if !loaded.deleting => {
                let id = loaded.delete_target.as_ref()?.id.clone();
                loaded.deleting = true;
                Some(id)
            }
            _ => None,
        }
    }

    /// Apply the delete response; on success exactly `id` is removed.
    pub fn finish_delete(&mut self, id: &str, result: &ApiResult<()>) {
        if let ListPhase::Loaded(loaded) = &mut self.phase {
            if result.is_ok() {
                loaded.items.retain(|item| item.id != id);
            }
            loaded.delete_target = None;
            loaded.deleting = false;
        }
    }
}

/// Footer text, e.g. "1 item in menu" / "3 items in menu"
pub fn count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} item{} in menu", count, plural)
}
