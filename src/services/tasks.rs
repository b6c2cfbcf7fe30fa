use std::sync::Arc;

use chrono::NaiveDate;
use log::error;
use serde::Deserialize;
use serde_json::json;

use super::Envelope;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Category, Task, TaskInput, User};

/// Wire shape of a task as the backend sends it. The completion flag is
/// named `is_completed` upstream and may be absent, in which case it reads
/// as false.
#[derive(Debug, Deserialize)]
struct TaskPayload {
    id: i64,
    title: String,
    description: String,
    due_date: NaiveDate,
    #[serde(default)]
    is_completed: Option<bool>,
    user: User,
    category: Category,
}

impl TaskPayload {
    fn into_task(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            completed: self.is_completed.unwrap_or(false),
            user: self.user,
            category: self.category,
        }
    }
}

/// Task CRUD against the backend. Transport errors are logged here and
/// rethrown untransformed.
pub struct TaskService {
    http: Arc<HttpClient>,
}

impl TaskService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let envelope: Envelope<Vec<TaskPayload>> =
            self.http.get("/tasks").await.map_err(|err| {
                error!("failed to fetch tasks: {}", err);
                err
            })?;
        Ok(envelope
            .data
            .into_iter()
            .map(TaskPayload::into_task)
            .collect())
    }

    /// Creates a task. New tasks always start incomplete.
    pub async fn create(&self, input: &TaskInput) -> Result<Task, ApiError> {
        let body = json!({
            "title": input.title,
            "description": input.description,
            "due_date": input.due_date,
            "category_id": input.category_id,
            "is_completed": false,
        });
        let envelope: Envelope<TaskPayload> =
            self.http.post("/tasks", Some(body)).await.map_err(|err| {
                error!("failed to create task: {}", err);
                err
            })?;
        Ok(envelope.data.into_task())
    }

    pub async fn update(&self, id: i64, input: &TaskInput) -> Result<Task, ApiError> {
        let body = serde_json::to_value(input)?;
        let envelope: Envelope<TaskPayload> = self
            .http
            .put(&format!("/tasks/{}", id), body)
            .await
            .map_err(|err| {
                error!("failed to update task {}: {}", id, err);
                err
            })?;
        Ok(envelope.data.into_task())
    }

    /// Flips the completion flag via the dedicated toggle endpoint.
    pub async fn toggle(&self, id: i64, completed: bool) -> Result<Task, ApiError> {
        let body = json!({ "is_completed": completed });
        let envelope: Envelope<TaskPayload> = self
            .http
            .patch(&format!("/tasks/{}/toggle", id), body)
            .await
            .map_err(|err| {
                error!("failed to toggle task {}: {}", id, err);
                err
            })?;
        Ok(envelope.data.into_task())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.http
            .delete(&format!("/tasks/{}", id))
            .await
            .map_err(|err| {
                error!("failed to delete task {}: {}", id, err);
                err
            })
    }
}
