//! Menu API
//!
//! Frontend bindings to the `/foods` REST endpoints, organized behind a
//! trait so the UI state flows can run against an in-memory backend.

mod client;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{MenuItem, MenuItemInput};

pub use client::ApiClient;

/// CRUD operations on menu items. One request/response per call, no retries.
#[async_trait(?Send)]
pub trait MenuApi: Send + Sync {
    /// All items, in server order
    async fn list_items(&self) -> ApiResult<Vec<MenuItem>>;

    async fn get_item(&self, id: &str) -> ApiResult<MenuItem>;

    /// Create an item; the server assigns `id` and `created_at`
    async fn create_item(&self, input: &MenuItemInput) -> ApiResult<MenuItem>;

    /// Replace all editable fields of an existing item
    async fn update_item(&self, id: &str, input: &MenuItemInput) -> ApiResult<MenuItem>;

    async fn delete_item(&self, id: &str) -> ApiResult<()>;
}
