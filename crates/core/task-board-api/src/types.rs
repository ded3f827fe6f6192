use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ApiError, ApiResult};

/// Backend-assigned task identifier
///
/// Opaque to the client: numeric ids stay numeric and string ids stay
/// strings, so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

/// A task record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// The description, if there is one worth showing
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Payload for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    title: String,
    description: String,
}

impl NewTask {
    /// Build a payload from raw form input
    ///
    /// Both fields are trimmed. A blank title is rejected.
    pub fn from_input(title: &str, description: &str) -> ApiResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ApiError::validation("task title must not be empty"));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Envelope of the collection endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_title_rejected() {
        for title in ["", "   ", "\t\n"] {
            let err = NewTask::from_input(title, "something").unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let task = NewTask::from_input("  Buy milk ", "  two litres\n").unwrap();
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.description(), "two litres");
    }

    #[test]
    fn test_new_task_wire_format() {
        let task = NewTask::from_input("Buy milk", "").unwrap();
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({"title": "Buy milk", "description": ""})
        );
    }

    #[test]
    fn test_task_accepts_numeric_and_string_ids() {
        let numeric: Task = serde_json::from_value(json!({"id": 1, "title": "a"})).unwrap();
        assert_eq!(numeric.id, TaskId::Number(1));
        assert_eq!(numeric.id.to_string(), "1");

        let text: Task =
            serde_json::from_value(json!({"id": "01HZX", "title": "b", "completed": true}))
                .unwrap();
        assert_eq!(text.id, TaskId::Text("01HZX".to_string()));
        assert!(text.completed);
    }

    #[test]
    fn test_minimal_create_response() {
        let task: Task =
            serde_json::from_value(json!({"id": 1, "title": "Buy milk", "description": ""}))
                .unwrap();
        assert!(!task.completed);
        assert_eq!(task.description(), None);
    }

    #[test]
    fn test_null_description_and_extra_fields() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": "Walk dog",
            "description": null,
            "completed": false,
            "created_at": "2026-10-16T09:00:00Z"
        }))
        .unwrap();
        assert_eq!(task.description(), None);
    }

    #[test]
    fn test_task_list_envelope() {
        let list: TaskList = serde_json::from_value(json!({
            "tasks": [
                {"id": 1, "title": "a", "description": "x", "completed": true},
                {"id": 2, "title": "b", "description": "", "completed": false}
            ]
        }))
        .unwrap();
        assert_eq!(list.tasks.len(), 2);
        assert_eq!(list.tasks[0].description(), Some("x"));
    }
}
