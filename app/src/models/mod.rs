//! Entities and their persistence operations
//!
//! Both tables soft-delete: a row with `deleted_at` set is never returned by
//! the read operations.

pub mod activity_groups;
pub mod todo_items;
