pub mod form;
pub mod todo;

pub use form::{AddTodoForm, UpdateTodoForm};
pub use todo::{DeleteResponse, Todo, TodoCreate};
