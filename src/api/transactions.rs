//! Transaction Endpoints
//!
//! List, create, update and delete against `/api/transactions`.

use gloo_net::http::Request;

use crate::models::{Transaction, TransactionPayload};
use super::{delete, endpoint, get_json, send_json, ApiResult};

const TRANSACTIONS: &str = "/api/transactions";

fn transaction_path(id: u32) -> String {
    format!("{}/{}", TRANSACTIONS, id)
}

pub async fn list_transactions(base: &str) -> ApiResult<Vec<Transaction>> {
    get_json(base, TRANSACTIONS).await
}

pub async fn create_transaction(base: &str, payload: &TransactionPayload) -> ApiResult<()> {
    send_json(Request::post(&endpoint(base, TRANSACTIONS)), TRANSACTIONS, payload).await
}

pub async fn update_transaction(base: &str, id: u32, payload: &TransactionPayload) -> ApiResult<()> {
    let path = transaction_path(id);
    send_json(Request::put(&endpoint(base, &path)), &path, payload).await
}

pub async fn delete_transaction(base: &str, id: u32) -> ApiResult<()> {
    delete(base, &transaction_path(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_path() {
        assert_eq!(transaction_path(42), "/api/transactions/42");
    }
}
