//! Menu Manager App
//!
//! Application shell: header, menu list, form modal, and toast.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{ApiClient, MenuApi};
use crate::components::{ItemFormModal, MenuList, NoticeSlot, SubmitFuture, Toast};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::models::{MenuItem, MenuItemInput};
use crate::state::notice::{Notice, MSG_DELETED, MSG_DELETE_FAILED};
use crate::state::ShellState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("Menu API at {}", config.base_url);
    let api: Arc<dyn MenuApi> = Arc::new(ApiClient::new(&config));

    view! { <Shell api=api /> }
}

/// Shell over any `MenuApi`
#[component]
pub fn Shell(api: Arc<dyn MenuApi>) -> impl IntoView {
    let ctx = AppContext::new(api);
    provide_context(ctx);

    // State
    let shell = RwSignal::new(ShellState::new());
    let notices = NoticeSlot::new();

    let on_submit = Callback::new(move |input: MenuItemInput| -> SubmitFuture {
        let request = shell.with_untracked(|s| s.submit_request(input));
        let api = ctx.api();
        Box::pin(async move {
            let Some(request) = request else {
                return;
            };
            let result = request.send(api.as_ref()).await;
            match &result {
                Ok(item) => log::info!("Saved item {}", item.id),
                Err(e) => log::warn!("Save failed: {}", e),
            }
            if let Some(outcome) = shell.try_update(|s| s.finish_submit(&request, &result)) {
                notices.show(outcome.notice);
                if outcome.reload {
                    ctx.reload();
                }
            }
        })
    });

    let on_close = Callback::new(move |_: ()| shell.update(|s| s.close()));
    let on_edit = Callback::new(move |item: MenuItem| shell.update(|s| s.open_edit(item)));
    let on_deleted = Callback::new(move |_: ()| notices.show(Notice::success(MSG_DELETED)));
    let on_delete_failed = Callback::new(move |_: ()| notices.show(Notice::error(MSG_DELETE_FAILED)));

    // Keyed by session so reopening the same mode mounts a fresh form
    let modal = Memo::new(move |_| shell.with(|s| s.modal().map(|mode| (s.session(), mode.clone()))));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div>
                    <h1>"🏨 Hotel Menu Manager"</h1>
                    <p class="app-subtitle">"Manage your restaurant's food menu"</p>
                </div>
                <button class="btn btn-primary add-btn" on:click=move |_| shell.update(|s| s.open_create())>
                    "+ Add Food Item"
                </button>
            </header>

            <main class="main-content">
                <MenuList
                    on_edit=on_edit
                    on_deleted=on_deleted
                    on_delete_failed=on_delete_failed
                />
            </main>

            {move || modal.get().map(|(_, mode)| view! {
                <ItemFormModal mode=mode on_submit=on_submit on_close=on_close />
            })}

            {move || notices.current().map(|notice| view! { <Toast notice=notice /> })}
        </div>
    }
}
