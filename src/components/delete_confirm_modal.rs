//! Delete Confirm Modal Component
//!
//! Blocking yes/no prompt before a menu item is deleted.

use leptos::prelude::*;

/// Lets exactly one of confirm/cancel through, once
#[derive(Debug, Default)]
struct ConfirmGate {
    settled: bool,
}

impl ConfirmGate {
    /// True the first time only
    fn settle(&mut self) -> bool {
        !std::mem::replace(&mut self.settled, true)
    }
}

/// Delete confirmation dialog
///
/// # Arguments
/// * `name` - Display name of the item about to be deleted
/// * `on_confirm` - Runs when the user clicks "Delete"
/// * `on_cancel` - Runs on "Cancel" or a backdrop click
#[component]
pub fn DeleteConfirmModal(
    #[prop(into)] name: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let gate = StoredValue::new(ConfirmGate::default());

    let settle = move |choice: Callback<()>| {
        if gate.try_update_value(|g| g.settle()).unwrap_or(false) {
            choice.run(());
        }
    };

    view! {
        <div class="modal-root">
            <div class="modal-backdrop" on:click=move |_| settle(on_cancel)></div>

            <div class="modal-dialog confirm-dialog">
                <div class="confirm-icon">"🗑"</div>
                <h3>"Delete Food Item"</h3>
                <p class="confirm-text">
                    "Are you sure you want to delete "
                    <span class="confirm-name">"\"" {name} "\""</span>
                    "? This action cannot be undone."
                </p>

                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| settle(on_cancel)>
                        "Cancel"
                    </button>
                    <button class="btn btn-danger" on:click=move |_| settle(on_confirm)>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
