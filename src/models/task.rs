use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, User};

/// A task in the client's domain shape.
///
/// The backend calls the completion flag `is_completed`; the client-facing
/// field is `completed`. The rename happens in the service layer when wire
/// payloads are mapped into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub user: User,
    pub category: Category,
}

/// Input for creating or updating a task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub category_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_input_serializes_backend_field_names() {
        let input = TaskInput {
            title: "Water the plants".to_string(),
            description: "Balcony only".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 8, 30).unwrap(),
            category_id: 2,
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["title"], "Water the plants");
        assert_eq!(value["due_date"], "2025-08-30");
        assert_eq!(value["category_id"], 2);
        // The completion flag is not part of the input shape; create adds it.
        assert!(value.get("is_completed").is_none());
    }
}
