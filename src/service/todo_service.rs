use crate::db::TodoStorage;
use crate::error::TodoError;
use crate::types::{Todo, TodoCreate};
use tracing::{debug, info};

/// The five todo operations shared by both transports.
#[derive(Clone)]
pub struct TodoService {
    storage: TodoStorage,
}

impl TodoService {
    pub fn new(storage: TodoStorage) -> Self {
        Self { storage }
    }

    pub async fn create(&self, input: TodoCreate) -> Result<Todo, TodoError> {
        let row = self.storage.insert(&input.title, input.completed).await?;
        info!(id = row.id, title = %row.title, "todo created");
        Ok(row.into())
    }

    pub async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        let rows = self.storage.list().await?;
        debug!(count = rows.len(), "todos listed");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Overwrite title and completed. Fails with `NotFound` for an unknown id.
    pub async fn update(&self, id: i64, input: TodoCreate) -> Result<Todo, TodoError> {
        let row = self
            .storage
            .update_by_id(id, &input.title, input.completed)
            .await?
            .ok_or(TodoError::NotFound(id))?;
        info!(id, title = %row.title, completed = row.completed, "todo updated");
        Ok(row.into())
    }

    pub async fn delete(&self, id: i64) -> Result<(), TodoError> {
        if !self.storage.delete_by_id(id).await? {
            return Err(TodoError::NotFound(id));
        }
        info!(id, "todo deleted");
        Ok(())
    }
}
