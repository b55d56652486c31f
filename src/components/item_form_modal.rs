//! Item Form Modal Component
//!
//! Create/edit form for a single menu item. Validates locally and hands the
//! actual save to its caller.

use std::future::Future;
use std::pin::Pin;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Category, MenuItemInput};
use crate::state::form::{FormError, FormMode, FormState};

/// Save in progress, resolving once the round trip settles either way
pub type SubmitFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Modal form for adding or editing a menu item
#[component]
pub fn ItemFormModal(
    mode: FormMode,
    /// Starts the save; the modal stays busy until the returned future resolves
    #[prop(into)]
    on_submit: Callback<MenuItemInput, SubmitFuture>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let title = mode.title();
    let submit_label = mode.submit_label();
    let icon = if mode.is_edit() { "✏️" } else { "➕" };

    let form = RwSignal::new(FormState::new(mode));
    let (error, set_error) = signal(None::<String>);

    let submitting = move || form.with(|f| f.is_submitting());

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(input)) => {
                set_error.set(None);
                let pending = on_submit.run(input);
                spawn_local(async move {
                    pending.await;
                    // The modal may already be gone
                    form.try_update(|f| f.finish_submit());
                });
            }
            Some(Err(FormError::Busy)) | None => {}
            Some(Err(e)) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-root">
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>

            <div class="modal-dialog form-dialog">
                <div class="modal-header">
                    <h2><span class="modal-icon">{icon}</span>{title}</h2>
                </div>

                <form class="item-form" novalidate on:submit=on_form_submit>
                    <label class="field">
                        <span class="field-label">"Food Name"</span>
                        <input
                            type="text"
                            name="name"
                            placeholder="e.g. Grilled Salmon"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field-label">"Category"</span>
                        <select
                            name="category"
                            on:change=move |ev| form.update(|f| f.set_category(&event_target_value(&ev)))
                        >
                            {Category::ALL.into_iter().map(|category| view! {
                                <option
                                    value=category.as_str()
                                    selected=move || form.with(|f| f.category == category)
                                >
                                    {category.as_str()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>

                    <label class="field">
                        <span class="field-label">"Price ($)"</span>
                        <input
                            type="number"
                            name="price"
                            min="0.01"
                            step="0.01"
                            placeholder="0.00"
                            prop:value=move || form.with(|f| f.price_text.clone())
                            on:input=move |ev| form.update(|f| f.price_text = event_target_value(&ev))
                        />
                    </label>

                    <label class="field field-inline">
                        <input
                            type="checkbox"
                            name="available"
                            prop:checked=move || form.with(|f| f.available)
                            on:change=move |ev| form.update(|f| f.available = event_target_checked(&ev))
                        />
                        <span class="field-label">"Available on menu"</span>
                    </label>

                    {move || error.get().map(|message| view! {
                        <p class="form-error">{message}</p>
                    })}

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=submitting
                        >
                            {move || if submitting() {
                                view! { <span class="busy"><span class="spinner small"></span>"Saving..."</span> }.into_any()
                            } else {
                                view! { <span>{submit_label}</span> }.into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
