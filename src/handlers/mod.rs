//! HTTP handlers, one module per transport.

pub mod docs;
pub mod form;
pub mod todos;
