pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod render;
pub mod router;
pub mod service;
pub mod types;

pub use error::TodoError;
pub use service::TodoService;
pub use types::Todo;
