use crate::types::Todo;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbTodo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl From<DbTodo> for Todo {
    fn from(d: DbTodo) -> Self {
        Todo {
            id: d.id,
            title: d.title,
            completed: d.completed,
        }
    }
}
