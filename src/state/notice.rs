//! Toast Notices

/// How long a notice stays on screen
pub const NOTICE_DURATION_MS: u32 = 3_000;

pub const MSG_ADDED: &str = "Food item added successfully!";
pub const MSG_UPDATED: &str = "Food item updated successfully!";
pub const MSG_DELETED: &str = "Food item deleted successfully!";
pub const MSG_SAVE_FAILED: &str = "Something went wrong. Please try again.";
pub const MSG_DELETE_FAILED: &str = "Failed to delete food item.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "toast toast-success",
            NoticeKind::Error => "toast toast-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✕",
        }
    }
}
