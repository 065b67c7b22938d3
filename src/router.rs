use axum::{
    Router,
    routing::{get, post, put},
};

use crate::config::Transports;
use crate::db::TodoStorage;
use crate::handlers::{docs, form, todos};
use crate::service::TodoService;

#[derive(Clone)]
pub struct TodoState {
    pub service: TodoService,
}

impl TodoState {
    pub fn new(storage: TodoStorage) -> Self {
        Self {
            service: TodoService::new(storage),
        }
    }
}

/// Mount the enabled transport adapters. `/` belongs to the form transport when
/// it is enabled, otherwise it redirects to the API docs.
pub fn todo_router(state: TodoState, transports: Transports) -> Router {
    let mut router = Router::new();

    if transports.json {
        router = router
            .route("/todos/", get(todos::list_todos).post(todos::create_todo))
            .route(
                "/todos/{id}",
                put(todos::update_todo).delete(todos::delete_todo),
            )
            .route(docs::OPENAPI_PATH, get(docs::openapi_json))
            .route("/docs", get(docs::docs_page));
        if !transports.form {
            router = router.route("/", get(docs::root_redirect));
        }
    }

    if transports.form {
        router = router
            .route("/", get(form::home))
            .route("/add", post(form::add_todo))
            .route("/update/{id}", post(form::update_todo))
            .route("/delete/{id}", post(form::delete_todo));
    }

    router.with_state(state)
}
