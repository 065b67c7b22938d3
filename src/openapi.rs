use utoipa::OpenApi;

use crate::handlers::todos;
use crate::types::{DeleteResponse, Todo, TodoCreate};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0"
    ),
    paths(
        todos::create_todo,
        todos::list_todos,
        todos::update_todo,
        todos::delete_todo
    ),
    tags(
        (name = "todos", description = "Todo CRUD endpoints")
    ),
    components(schemas(Todo, TodoCreate, DeleteResponse))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_json_transport_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/todos/"));
        assert!(doc.paths.paths.contains_key("/todos/{id}"));
        assert!(!doc.paths.paths.contains_key("/add"));
    }
}
