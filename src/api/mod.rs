//! Finance API Client
//!
//! HTTP bindings to the REST server, organized by resource.

mod categories;
mod summary;
mod transactions;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Category, Summary, Transaction, TransactionPayload};

pub use categories::*;
pub use summary::*;
pub use transactions::*;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything the controller needs from the server
#[async_trait(?Send)]
pub trait Api {
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;
    async fn list_transactions(&self) -> ApiResult<Vec<Transaction>>;
    async fn create_transaction(&self, payload: &TransactionPayload) -> ApiResult<()>;
    async fn update_transaction(&self, id: u32, payload: &TransactionPayload) -> ApiResult<()>;
    async fn delete_transaction(&self, id: u32) -> ApiResult<()>;
    async fn get_summary(&self) -> ApiResult<Summary>;
}

/// `fetch`-backed client rooted at `base`
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl Api for HttpApi {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        list_categories(&self.base).await
    }

    async fn list_transactions(&self) -> ApiResult<Vec<Transaction>> {
        list_transactions(&self.base).await
    }

    async fn create_transaction(&self, payload: &TransactionPayload) -> ApiResult<()> {
        create_transaction(&self.base, payload).await
    }

    async fn update_transaction(&self, id: u32, payload: &TransactionPayload) -> ApiResult<()> {
        update_transaction(&self.base, id, payload).await
    }

    async fn delete_transaction(&self, id: u32) -> ApiResult<()> {
        delete_transaction(&self.base, id).await
    }

    async fn get_summary(&self) -> ApiResult<Summary> {
        get_summary(&self.base).await
    }
}

// ========================
// Request Helpers
// ========================

pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn transport(path: &str, err: gloo_net::Error) -> ApiError {
    ApiError::Transport {
        path: path.to_string(),
        message: err.to_string(),
    }
}

fn ensure_ok(path: &str, response: &Response) -> ApiResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            path: path.to_string(),
            status: response.status(),
        })
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(base: &str, path: &str) -> ApiResult<T> {
    let response = Request::get(&endpoint(base, path))
        .send()
        .await
        .map_err(|e| transport(path, e))?;
    ensure_ok(path, &response)?;
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Send a JSON body with `builder`; only the status matters
pub(crate) async fn send_json<B: Serialize>(builder: RequestBuilder, path: &str, body: &B) -> ApiResult<()> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = builder
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| transport(path, e))?
        .send()
        .await
        .map_err(|e| transport(path, e))?;
    ensure_ok(path, &response)
}

pub(crate) async fn delete(base: &str, path: &str) -> ApiResult<()> {
    let response = Request::delete(&endpoint(base, path))
        .send()
        .await
        .map_err(|e| transport(path, e))?;
    ensure_ok(path, &response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base() {
        assert_eq!(endpoint("", "/api/summary"), "/api/summary");
        assert_eq!(endpoint("http://localhost:5000/", "/api/summary"), "http://localhost:5000/api/summary");
        assert_eq!(endpoint("https://x.test/app", "/api/categories"), "https://x.test/app/api/categories");
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status { path: "/api/transactions/3".to_string(), status: 404 };
        assert_eq!(err.to_string(), "/api/transactions/3 returned HTTP 404");
    }
}
