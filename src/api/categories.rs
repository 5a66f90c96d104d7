//! Category Endpoints

use crate::models::Category;
use super::{get_json, ApiResult};

const CATEGORIES: &str = "/api/categories";

pub async fn list_categories(base: &str) -> ApiResult<Vec<Category>> {
    get_json(base, CATEGORIES).await
}
