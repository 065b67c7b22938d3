use crate::db::models::DbTodo;
use crate::db::schema::SQLITE_INIT;
use crate::error::TodoError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool against `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, TodoError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Accessors for the `todos` table.
///
/// Every call checks a connection (or transaction) out of the pool and hands it
/// back when the call returns, on the error path too.
#[derive(Clone)]
pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TodoError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a row and return it with its assigned id.
    pub async fn insert(&self, title: &str, completed: bool) -> Result<DbTodo, TodoError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, DbTodo>(
            "INSERT INTO todos (title, completed) VALUES (?, ?) RETURNING id, title, completed",
        )
        .bind(title)
        .bind(completed)
        .fetch_one(&mut *conn)
        .await?;
        Ok(row)
    }

    pub async fn list(&self) -> Result<Vec<DbTodo>, TodoError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, DbTodo>("SELECT id, title, completed FROM todos ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Point lookup. The service paths go through `update_by_id` / `delete_by_id`,
    /// which check existence inside their own transaction.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbTodo>, TodoError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, DbTodo>("SELECT id, title, completed FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Overwrite title and completed of an existing row. `None` when the id is absent.
    pub async fn update_by_id(
        &self,
        id: i64,
        title: &str,
        completed: bool,
    ) -> Result<Option<DbTodo>, TodoError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, DbTodo>(
            "UPDATE todos SET title = ?, completed = ? WHERE id = ? RETURNING id, title, completed",
        )
        .bind(title)
        .bind(completed)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(row))
    }

    /// Remove a row. Returns `false` when the id is absent.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, TodoError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }
        tx.commit().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn storage() -> TodoStorage {
        let pool = connect("sqlite::memory:", 1).await.expect("open in-memory db");
        let storage = TodoStorage::new(pool);
        storage.init_schema().await.expect("init schema");
        storage
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let storage = storage().await;
        let a = storage.insert("first", false).await.unwrap();
        let b = storage.insert("second", true).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(b.completed);

        let all = storage.list().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let storage = storage().await;
        storage.insert("kept", false).await.unwrap();
        storage.init_schema().await.unwrap();
        assert_eq!(storage.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_missing_row_returns_none() {
        let storage = storage().await;
        let res = storage.update_by_id(42, "nope", true).await.unwrap();
        assert!(res.is_none());
        assert!(storage.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let storage = storage().await;
        let created = storage.insert("Buy milk", false).await.unwrap();
        let updated = storage
            .update_by_id(created.id, "Buy oat milk", true)
            .await
            .unwrap()
            .expect("row exists");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Buy oat milk");
        assert!(updated.completed);
        assert_eq!(storage.get_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn delete_reports_whether_row_existed() {
        let storage = storage().await;
        let created = storage.insert("gone soon", false).await.unwrap();
        assert!(storage.delete_by_id(created.id).await.unwrap());
        assert!(!storage.delete_by_id(created.id).await.unwrap());
        assert!(storage.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let storage = storage().await;
        let first = storage.insert("one", false).await.unwrap();
        storage.delete_by_id(first.id).await.unwrap();
        let second = storage.insert("two", false).await.unwrap();
        assert!(second.id > first.id);
    }
}
