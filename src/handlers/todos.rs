use axum::{
    Json,
    extract::{Path, State},
};

use crate::middleware::ApiJson;
use crate::types::{DeleteResponse, Todo, TodoCreate};
use crate::{TodoError, router::TodoState};

/// POST /todos/ -> create a todo and return it with its assigned id.
#[utoipa::path(
    post,
    path = "/todos/",
    tag = "todos",
    request_body = TodoCreate,
    responses(
        (status = 200, description = "Created todo", body = Todo),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn create_todo(
    State(state): State<TodoState>,
    ApiJson(input): ApiJson<TodoCreate>,
) -> Result<Json<Todo>, TodoError> {
    Ok(Json(state.service.create(input).await?))
}

/// GET /todos/ -> every todo in insertion order.
#[utoipa::path(
    get,
    path = "/todos/",
    tag = "todos",
    responses(
        (status = 200, description = "All todos", body = Vec<Todo>)
    )
)]
pub async fn list_todos(State(state): State<TodoState>) -> Result<Json<Vec<Todo>>, TodoError> {
    Ok(Json(state.service.list().await?))
}

/// PUT /todos/{id} -> overwrite title and completed.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    request_body = TodoCreate,
    responses(
        (status = 200, description = "Updated todo", body = Todo),
        (status = 404, description = "Todo not found"),
        (status = 422, description = "Malformed body")
    )
)]
pub async fn update_todo(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<TodoCreate>,
) -> Result<Json<Todo>, TodoError> {
    Ok(Json(state.service.update(id, input).await?))
}

/// DELETE /todos/{id}
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo deleted", body = DeleteResponse),
        (status = 404, description = "Todo not found")
    )
)]
pub async fn delete_todo(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, TodoError> {
    state.service.delete(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
