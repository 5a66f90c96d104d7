//! Summary Endpoint

use crate::models::Summary;
use super::{get_json, ApiResult};

const SUMMARY: &str = "/api/summary";

/// Current month's income, expenses and balance
pub async fn get_summary(base: &str) -> ApiResult<Summary> {
    get_json(base, SUMMARY).await
}
