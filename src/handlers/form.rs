use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use tracing::debug;

use crate::middleware::ApiForm;
use crate::render;
use crate::types::{AddTodoForm, TodoCreate, UpdateTodoForm};
use crate::{TodoError, router::TodoState};

/// GET / -> the rendered todo list.
pub async fn home(State(state): State<TodoState>) -> Result<Html<String>, TodoError> {
    let todos = state.service.list().await?;
    Ok(Html(render::home_page(&todos)))
}

/// POST /add -> create with `completed = false`, then back home.
pub async fn add_todo(
    State(state): State<TodoState>,
    ApiForm(form): ApiForm<AddTodoForm>,
) -> Result<Redirect, TodoError> {
    state
        .service
        .create(TodoCreate {
            title: form.title,
            completed: false,
        })
        .await?;
    Ok(Redirect::to("/"))
}

/// POST /update/{id} -> an unknown id is a silent no-op; still redirects home.
pub async fn update_todo(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
    ApiForm(form): ApiForm<UpdateTodoForm>,
) -> Result<Redirect, TodoError> {
    let input = TodoCreate {
        title: form.title,
        completed: form.completed,
    };
    ignore_not_found(state.service.update(id, input).await.map(drop))?;
    Ok(Redirect::to("/"))
}

/// POST /delete/{id} -> an unknown id is a silent no-op; still redirects home.
pub async fn delete_todo(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
) -> Result<Redirect, TodoError> {
    ignore_not_found(state.service.delete(id).await)?;
    Ok(Redirect::to("/"))
}

fn ignore_not_found(result: Result<(), TodoError>) -> Result<(), TodoError> {
    match result {
        Err(TodoError::NotFound(id)) => {
            debug!(id, "form request for missing todo ignored");
            Ok(())
        }
        other => other,
    }
}
