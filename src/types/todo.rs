use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted todo item as exposed by the JSON transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Request body for both `POST /todos/` and `PUT /todos/{id}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TodoCreate {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Todo deleted".to_string(),
        }
    }
}
