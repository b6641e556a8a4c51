//! REST client for the catalog endpoints.
//!
//! Wraps `/api/director` and `/api/movies` using [`reqwest`]. One generic
//! set of methods serves both entity kinds through [`Resource`].

use cinecat_core::pagination::{Page, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use cinecat_core::types::DbId;
use cinecat_db::store::Entity;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::resource::Resource;

/// Query string sent with every list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: i64,
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

/// Errors from the catalog REST client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The targeted record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The API returned some other non-2xx status.
    #[error("Catalog API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A form failed local validation; nothing was sent.
    #[error("{0}")]
    Validation(String),
}

/// HTTP client for one catalog API host.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogApi {
    /// * `base_url` - API host, e.g. `http://localhost:5033`. A trailing
    ///   slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/{path}?page=&pageSize=&search=`
    pub async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Page<R::Item>, ClientError> {
        let response = self
            .client
            .get(self.collection_url::<R>())
            .query(query)
            .send()
            .await?;

        Self::parse_response::<R, _>(response, None).await
    }

    /// `GET /api/{path}/{id}`
    pub async fn get<R: Resource>(&self, id: DbId) -> Result<R::Item, ClientError> {
        let response = self.client.get(self.item_url::<R>(id)).send().await?;

        Self::parse_response::<R, _>(response, Some(id)).await
    }

    /// `POST /api/{path}`
    pub async fn create<R: Resource>(&self, payload: &R::Payload) -> Result<R::Item, ClientError> {
        let response = self
            .client
            .post(self.collection_url::<R>())
            .json(payload)
            .send()
            .await?;

        Self::parse_response::<R, _>(response, None).await
    }

    /// `PUT /api/{path}/{id}` with a full replacement payload.
    pub async fn update<R: Resource>(
        &self,
        id: DbId,
        payload: &R::Payload,
    ) -> Result<R::Item, ClientError> {
        let response = self
            .client
            .put(self.item_url::<R>(id))
            .json(payload)
            .send()
            .await?;

        Self::parse_response::<R, _>(response, Some(id)).await
    }

    /// `DELETE /api/{path}/{id}`
    ///
    /// Directors answer 204 and movies 200 with a confirmation body; the
    /// body is not read either way.
    pub async fn delete<R: Resource>(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.item_url::<R>(id)).send().await?;

        Self::ensure_success::<R>(response, Some(id)).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/api/{}", self.base_url, R::PATH)
    }

    fn item_url<R: Resource>(&self, id: DbId) -> String {
        format!("{}/api/{}/{}", self.base_url, R::PATH, id)
    }

    /// Map a 404 on an item URL to [`ClientError::NotFound`] and any other
    /// non-2xx status to [`ClientError::Api`].
    async fn ensure_success<R: Resource>(
        response: reqwest::Response,
        id: Option<DbId>,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match id {
            Some(id) if status == reqwest::StatusCode::NOT_FOUND => Err(ClientError::NotFound {
                entity: <R::Item as Entity>::KIND,
                id,
            }),
            _ => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<unreadable body>".to_string());
                Err(ClientError::Api {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn parse_response<R: Resource, T: DeserializeOwned>(
        response: reqwest::Response,
        id: Option<DbId>,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success::<R>(response, id).await?;
        Ok(response.json::<T>().await?)
    }
}
