//! UI State Machines
//!
//! Plain state types behind each component, kept free of signals so the
//! CRUD flows can be driven directly in tests.

pub mod form;
pub mod list;
pub mod notice;
pub mod shell;

pub use form::{FormError, FormMode, FormState};
pub use list::{ListPhase, ListState, Loaded};
pub use notice::{Notice, NoticeKind};
pub use shell::{ShellState, SubmitCall, SubmitRequest};
