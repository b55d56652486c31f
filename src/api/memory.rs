//! In-memory `MenuApi` for tests
//!
//! Mirrors the server's behavior: assigns ids and timestamps, rejects
//! blank names and non-positive prices, 404s on unknown ids.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::MenuApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{MenuItem, MenuItemInput};

#[derive(Default)]
pub struct MemoryApi {
    items: Mutex<Vec<MenuItem>>,
    next_id: Mutex<u32>,
    calls: Mutex<Vec<&'static str>>,
    offline: Mutex<bool>,
}

impl MemoryApi {
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let api = Self::default();
        *api.next_id.lock().unwrap() = items.len() as u32;
        *api.items.lock().unwrap() = items;
        api
    }

    /// Make every following call fail with a transport error
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    /// Names of the operations invoked so far
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn items(&self) -> Vec<MenuItem> {
        self.items.lock().unwrap().clone()
    }

    fn enter(&self, op: &'static str) -> ApiResult<()> {
        self.calls.lock().unwrap().push(op);
        if *self.offline.lock().unwrap() {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn check(input: &MenuItemInput) -> ApiResult<()> {
        if input.name.trim().is_empty() {
            return Err(ApiError::Validation("name is required".to_string()));
        }
        if !(input.price > 0.0) {
            return Err(ApiError::Validation("price must be greater than 0".to_string()));
        }
        Ok(())
    }
}

/// Fixed timestamp `n` seconds after 2024-01-01T00:00:00Z
pub fn timestamp(n: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_704_067_200 + n, 0).unwrap()
}

#[async_trait(?Send)]
impl MenuApi for MemoryApi {
    async fn list_items(&self) -> ApiResult<Vec<MenuItem>> {
        self.enter("list")?;
        Ok(self.items())
    }

    async fn get_item(&self, id: &str) -> ApiResult<MenuItem> {
        self.enter("get")?;
        self.items()
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create_item(&self, input: &MenuItemInput) -> ApiResult<MenuItem> {
        self.enter("create")?;
        Self::check(input)?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let item = MenuItem {
            id: next_id.to_string(),
            name: input.name.clone(),
            category: input.category,
            price: input.price,
            available: input.available,
            created_at: timestamp(*next_id as i64),
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: &str, input: &MenuItemInput) -> ApiResult<MenuItem> {
        self.enter("update")?;
        Self::check(input)?;
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        item.name = input.name.clone();
        item.category = input.category;
        item.price = input.price;
        item.available = input.available;
        Ok(item.clone())
    }

    async fn delete_item(&self, id: &str) -> ApiResult<()> {
        self.enter("delete")?;
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
