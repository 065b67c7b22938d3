pub mod body;

pub use body::{ApiForm, ApiJson};
