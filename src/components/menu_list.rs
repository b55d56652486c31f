//! Menu List Component
//!
//! Fetches and renders menu items; owns the per-row edit/delete buttons and
//! the delete confirmation flow. Re-fetches whenever the app context is
//! asked to reload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmModal;
use crate::context::AppContext;
use crate::models::MenuItem;
use crate::state::list::{count_label, ListPhase, ListState};

/// Which top-level view the list is showing
#[derive(Debug, Clone, PartialEq)]
enum ListView {
    Loading,
    Error(String),
    Empty,
    Table,
}

fn list_view(state: &ListState) -> ListView {
    match state.phase() {
        ListPhase::Loading => ListView::Loading,
        ListPhase::LoadError(message) => ListView::Error(message.clone()),
        ListPhase::Loaded(loaded) if loaded.items.is_empty() => ListView::Empty,
        ListPhase::Loaded(_) => ListView::Table,
    }
}

/// Rows are identified by id alone; any edit goes through a full reload
fn row_key(item: &MenuItem) -> String {
    item.id.clone()
}

/// Menu table with loading, error, and empty states
#[component]
pub fn MenuList(
    /// User picked "Edit" on a row
    #[prop(into)]
    on_edit: Callback<MenuItem>,
    /// A confirmed delete succeeded (item already removed locally)
    #[prop(into)]
    on_deleted: Callback<()>,
    /// A confirmed delete failed
    #[prop(into)]
    on_delete_failed: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let state = RwSignal::new(ListState::new());

    let load = move || {
        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_items().await;
            match &result {
                Ok(items) => log::info!("Loaded {} items", items.len()),
                Err(e) => log::warn!("Load failed: {}", e),
            }
            state.try_update(|s| s.finish_load(ticket, result));
        });
    };

    // Load on mount and whenever the list is invalidated
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("Loading, trigger={}", trigger);
        load();
    });

    let confirm_delete = move || {
        let Some(id) = state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.delete_item(&id).await;
            state.try_update(|s| s.finish_delete(&id, &result));
            match result {
                Ok(()) => {
                    log::info!("Deleted item {}", id);
                    on_deleted.run(());
                }
                Err(e) => {
                    log::warn!("Delete of {} failed: {}", id, e);
                    on_delete_failed.run(());
                }
            }
        });
    };

    let view_kind = Memo::new(move |_| state.with(list_view));
    let delete_target = Memo::new(move |_| state.with(|s| s.delete_target().cloned()));
    let rows = move || state.with(|s| s.items().to_vec());

    view! {
        {move || match view_kind.get() {
            ListView::Loading => view! {
                <div class="list-loading">
                    <div class="spinner"></div>
                </div>
            }.into_any(),
            ListView::Error(message) => view! {
                <div class="list-error">
                    <p>{message}</p>
                    <button class="retry-btn" on:click=move |_| load()>"Try again"</button>
                </div>
            }.into_any(),
            ListView::Empty => view! {
                <div class="list-empty">
                    <div class="list-empty-icon">"🍽️"</div>
                    <h3>"No menu items yet"</h3>
                    <p>"Click \"Add Food Item\" to get started"</p>
                </div>
            }.into_any(),
            ListView::Table => view! {
                <div class="menu-table-card">
                    <table class="menu-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Category"</th>
                                <th>"Price"</th>
                                <th>"Status"</th>
                                <th class="col-actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=rows
                                key=row_key
                                children=move |item| {
                                    let edit_item = item.clone();
                                    let delete_item = item.clone();
                                    let status_class = if item.available { "status status-on" } else { "status status-off" };
                                    view! {
                                        <tr>
                                            <td class="cell-name">{item.name.clone()}</td>
                                            <td>
                                                <span class=item.category.badge_class()>{item.category.as_str()}</span>
                                            </td>
                                            <td class="cell-price">"$" {item.price_label()}</td>
                                            <td>
                                                <span class=status_class>{item.availability_label()}</span>
                                            </td>
                                            <td class="cell-actions">
                                                <button
                                                    class="edit-btn"
                                                    on:click=move |_| on_edit.run(edit_item.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="delete-btn"
                                                    on:click=move |_| state.update(|s| s.select_delete(delete_item.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <div class="menu-table-footer">
                        {move || count_label(state.with(|s| s.items().len()))}
                    </div>
                </div>
            }.into_any(),
        }}

        {move || delete_target.get().map(|item| view! {
            <DeleteConfirmModal
                name=item.name
                on_confirm=Callback::new(move |_| confirm_delete())
                on_cancel=Callback::new(move |_| state.update(|s| s.cancel_delete()))
            />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::timestamp;
    use crate::models::Category;

    #[test]
    fn test_row_key_is_id() {
        let tea = MenuItem {
            id: "7".to_string(),
            name: "Tea".to_string(),
            category: Category::Drinks,
            price: 2.5,
            available: true,
            created_at: timestamp(0),
        };
        let renamed = MenuItem {
            name: "Green Tea".to_string(),
            category: Category::Breakfast,
            price: 3.0,
            available: false,
            ..tea.clone()
        };
        assert_eq!(row_key(&tea), "7");
        assert_eq!(row_key(&tea), row_key(&renamed));
    }

    #[test]
    fn test_list_view_kinds() {
        let mut state = ListState::new();
        assert_eq!(list_view(&state), ListView::Loading);

        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(vec![]));
        assert_eq!(list_view(&state), ListView::Empty);

        let ticket = state.begin_load();
        state.finish_load(
            ticket,
            Ok(vec![MenuItem {
                id: "1".to_string(),
                name: "Tea".to_string(),
                category: Category::Drinks,
                price: 2.5,
                available: true,
                created_at: timestamp(0),
            }]),
        );
        assert_eq!(list_view(&state), ListView::Table);

        let ticket = state.begin_load();
        state.finish_load(ticket, Err(crate::error::ApiError::Transport("down".to_string())));
        assert!(matches!(list_view(&state), ListView::Error(_)));
    }
}
