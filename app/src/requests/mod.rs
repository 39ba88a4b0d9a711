//! Validated request payloads

pub mod activity;
pub mod todo;

pub use activity::{CreateActivityRequest, UpdateActivityRequest};
pub use todo::{CreateTodoRequest, UpdateTodoRequest};
