use std::sync::Arc;

use log::error;
use serde::Deserialize;
use serde_json::json;

use super::Envelope;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::Category;

/// Wire shape of a category. May carry an embedded `tasks` array, which the
/// client does not consume.
#[derive(Debug, Deserialize)]
struct CategoryPayload {
    id: i64,
    name: String,
}

impl CategoryPayload {
    fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
        }
    }
}

/// Category CRUD against the backend. Transport errors are logged here and
/// rethrown untransformed.
pub struct CategoryService {
    http: Arc<HttpClient>,
}

impl CategoryService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: Envelope<Vec<CategoryPayload>> =
            self.http.get("/categories").await.map_err(|err| {
                error!("failed to fetch categories: {}", err);
                err
            })?;
        Ok(envelope
            .data
            .into_iter()
            .map(CategoryPayload::into_category)
            .collect())
    }

    pub async fn create(&self, name: &str) -> Result<Category, ApiError> {
        let body = json!({ "name": name });
        let envelope: Envelope<CategoryPayload> = self
            .http
            .post("/categories", Some(body))
            .await
            .map_err(|err| {
                error!("failed to create category: {}", err);
                err
            })?;
        Ok(envelope.data.into_category())
    }
}
