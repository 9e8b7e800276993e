//! Remote trivia API access.
//!
//! The browse controller talks to the server only through [`ItemsApi`], so
//! the HTTP client in [`http`] can be swapped for an in-memory fake in tests.

pub mod http;

use std::future::Future;

use crate::error::Result;
use crate::types::{CategoryId, ItemId, ItemPage};

pub use http::HttpApi;

/// Operations the trivia API exposes to the browser
pub trait ItemsApi: Send + Sync {
    /// `GET /{collection}?page={page}`
    fn list_all(&self, page: u32) -> impl Future<Output = Result<ItemPage>> + Send;

    /// `GET /categories/{id}/{collection}?page={page}`
    fn list_by_category(
        &self,
        category: &CategoryId,
        page: u32,
    ) -> impl Future<Output = Result<ItemPage>> + Send;

    /// `POST /{collection}/search` with `{ q, page }`
    fn search(&self, term: &str, page: u32) -> impl Future<Output = Result<ItemPage>> + Send;

    /// `DELETE /{collection}/{id}`
    fn delete_item(&self, id: ItemId) -> impl Future<Output = Result<()>> + Send;
}

impl<T: ItemsApi> ItemsApi for std::sync::Arc<T> {
    fn list_all(&self, page: u32) -> impl Future<Output = Result<ItemPage>> + Send {
        (**self).list_all(page)
    }

    fn list_by_category(
        &self,
        category: &CategoryId,
        page: u32,
    ) -> impl Future<Output = Result<ItemPage>> + Send {
        (**self).list_by_category(category, page)
    }

    fn search(&self, term: &str, page: u32) -> impl Future<Output = Result<ItemPage>> + Send {
        (**self).search(term, page)
    }

    fn delete_item(&self, id: ItemId) -> impl Future<Output = Result<()>> + Send {
        (**self).delete_item(id)
    }
}
