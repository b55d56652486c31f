//! HTTP Client
//!
//! `MenuApi` over `reqwest` (browser `fetch` on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::MenuApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{MenuItem, MenuItemInput};

/// Characters escaped in an `{id}` path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const JSON: &str = "application/json";

/// Response envelope: `{ "data": ... }`
#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// Menu API client bound to one base address
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/foods/{}", self.base_url, utf8_percent_encode(id, PATH_SEGMENT))
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.http
            .request(method, url)
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
    }
}

/// Pass 2xx through, turn anything else into an `ApiError`
async fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body))
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> ApiResult<Option<T>> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.data)
}

async fn read_item(response: Response) -> ApiResult<MenuItem> {
    let body = check_status(response).await?.text().await?;
    parse_envelope(&body)?
        .ok_or_else(|| ApiError::Transport("Response has no data".to_string()))
}

#[async_trait(?Send)]
impl MenuApi for ApiClient {
    async fn list_items(&self) -> ApiResult<Vec<MenuItem>> {
        let fetch = async {
            let response = self.request(Method::GET, self.collection_url()).send().await?;
            let body = check_status(response).await?.text().await?;
            Ok::<_, ApiError>(parse_envelope::<Vec<MenuItem>>(&body)?.unwrap_or_default())
        };
        fetch.await.map_err(ApiError::into_transport)
    }

    async fn get_item(&self, id: &str) -> ApiResult<MenuItem> {
        let response = self.request(Method::GET, self.item_url(id)).send().await?;
        read_item(response).await
    }

    async fn create_item(&self, input: &MenuItemInput) -> ApiResult<MenuItem> {
        let response = self
            .request(Method::POST, self.collection_url())
            .json(input)
            .send()
            .await?;
        read_item(response).await
    }

    async fn update_item(&self, id: &str, input: &MenuItemInput) -> ApiResult<MenuItem> {
        let response = self
            .request(Method::PUT, self.item_url(id))
            .json(input)
            .send()
            .await?;
        read_item(response).await
    }

    async fn delete_item(&self, id: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, self.item_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
