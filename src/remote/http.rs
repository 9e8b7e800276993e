//! `reqwest`-backed implementation of [`ItemsApi`].

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::{BrowseError, Result};
use crate::types::{CategoryId, ItemId, ItemPage};

use super::ItemsApi;

/// Error body returned by the trivia backend, e.g. `{"message": "Not found."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Search request body
#[derive(Debug, Serialize)]
struct SearchBody<'a> {
    q: &'a str,
    page: u32,
}

/// HTTP client for the trivia API
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base: Url,
    collection: String,
}

impl HttpApi {
    /// Create a client from configuration
    ///
    /// Configures the HTTP client with the configured connect and total
    /// timeouts.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base: config.api_url()?,
            collection: config.collection.trim().to_string(),
        })
    }

    /// Build an endpoint URL by appending `segments` to the base URL path
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BrowseError::Config(format!("base_url '{}' cannot be used as a base", self.base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn paged(mut url: Url, page: u32) -> Url {
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());
        url
    }

    async fn get_page(&self, url: Url) -> Result<ItemPage> {
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-success response into `BrowseError::Api`, keeping the server's
/// message when the body carries one.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    Err(BrowseError::Api {
        status: status.as_u16(),
        message,
    })
}

impl ItemsApi for HttpApi {
    async fn list_all(&self, page: u32) -> Result<ItemPage> {
        let url = Self::paged(self.endpoint(&[self.collection.as_str()])?, page);
        self.get_page(url).await
    }

    async fn list_by_category(&self, category: &CategoryId, page: u32) -> Result<ItemPage> {
        let url = Self::paged(
            self.endpoint(&["categories", category.as_str(), self.collection.as_str()])?,
            page,
        );
        self.get_page(url).await
    }

    async fn search(&self, term: &str, page: u32) -> Result<ItemPage> {
        let url = self.endpoint(&[self.collection.as_str(), "search"])?;
        tracing::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(&SearchBody { q: term, page })
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let id = id.to_string();
        let url = self.endpoint(&[self.collection.as_str(), id.as_str()])?;
        tracing::debug!("DELETE {url}");
        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
