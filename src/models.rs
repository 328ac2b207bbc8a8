//! Wire Models
//!
//! Data structures matching the to-do API's JSON payloads.

use serde::{Deserialize, Serialize};

/// Completion state of a to-do. Only Pending -> Completed is ever requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TodoStatus {
    #[default]
    Pending,
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "Pending",
            TodoStatus::Completed => "Completed",
        }
    }
}

/// A server-owned to-do record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned, immutable
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: TodoStatus,
    /// Client-stamped at submit time
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

impl Todo {
    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// The user-editable part of a to-do
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
}

impl From<&Todo> for TodoFields {
    fn from(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
        }
    }
}

/// Body of `POST /todo/new`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

/// Body of `PUT /todo/edit/{id}`; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    pub fn completed() -> Self {
        Self {
            status: Some(TodoStatus::Completed),
            ..Default::default()
        }
    }
}

/// Every response shares this shape; which key is present decides success.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub token: Option<String>,
    pub message: Option<String>,
    pub data: Option<T>,
    pub error: Option<String>,
}
