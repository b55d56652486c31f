//! UI Components
//!
//! Leptos components for the menu console.

mod delete_confirm_modal;
mod item_form_modal;
mod menu_list;
mod toast;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use item_form_modal::{ItemFormModal, SubmitFuture};
pub use menu_list::MenuList;
pub use toast::{NoticeSlot, Toast};
