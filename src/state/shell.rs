//! Application Shell State
//!
//! Which form modal is open and what a submit from it turns into.

use crate::api::MenuApi;
use crate::error::ApiResult;
use crate::models::{MenuItem, MenuItemInput};
use crate::state::form::FormMode;
use crate::state::notice::{Notice, MSG_ADDED, MSG_SAVE_FAILED, MSG_UPDATED};

/// Network call a form submit maps to
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitCall {
    Create(MenuItemInput),
    Update(String, MenuItemInput),
}

/// A submit, tagged with the modal session that issued it
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    session: u64,
    call: SubmitCall,
}

impl SubmitRequest {
    pub fn call(&self) -> &SubmitCall {
        &self.call
    }

    pub async fn send(&self, api: &dyn MenuApi) -> ApiResult<MenuItem> {
        match &self.call {
            SubmitCall::Create(input) => api.create_item(input).await,
            SubmitCall::Update(id, input) => api.update_item(id, input).await,
        }
    }
}

/// What the shell does after a submit settles
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    /// The list must re-fetch
    pub reload: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    modal: Option<FormMode>,
    /// Bumped every time a modal opens
    session: u64,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open form modal, if any
    pub fn modal(&self) -> Option<&FormMode> {
        self.modal.as_ref()
    }

    /// Identifies the current modal opening; reopening the same mode gets a new one
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Item being edited, if the modal is in edit mode
    pub fn editing(&self) -> Option<&MenuItem> {
        match &self.modal {
            Some(FormMode::Edit(item)) => Some(item),
            _ => None,
        }
    }

    pub fn open_create(&mut self) {
        self.open(FormMode::Create);
    }

    pub fn open_edit(&mut self, item: MenuItem) {
        self.open(FormMode::Edit(item));
    }

    fn open(&mut self, mode: FormMode) {
        self.session += 1;
        self.modal = Some(mode);
    }

    pub fn close(&mut self) {
        self.modal = None;
    }

    /// Map form values to a create or update, by modal mode
    pub fn submit_request(&self, input: MenuItemInput) -> Option<SubmitRequest> {
        let call = match self.modal.as_ref()? {
            FormMode::Create => SubmitCall::Create(input),
            FormMode::Edit(item) => SubmitCall::Update(item.id.clone(), input),
        };
        Some(SubmitRequest {
            session: self.session,
            call,
        })
    }

    /// Apply a settled submit. On success the modal is closed only if it is
    /// still the opening that issued the request; on failure it stays open
    /// with the entered data.
    pub fn finish_submit(
        &mut self,
        request: &SubmitRequest,
        result: &ApiResult<MenuItem>,
    ) -> SubmitOutcome {
        if result.is_err() {
            return SubmitOutcome {
                notice: Notice::error(MSG_SAVE_FAILED),
                reload: false,
            };
        }
        if self.modal.is_some() && request.session == self.session {
            self.close();
        }
        let message = match request.call {
            SubmitCall::Create(_) => MSG_ADDED,
            SubmitCall::Update(..) => MSG_UPDATED,
        };
        SubmitOutcome {
            notice: Notice::success(message),
            reload: true,
        }
    }
}
