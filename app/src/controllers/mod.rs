pub mod activity;
pub mod home;
pub mod todo;

pub use activity::ActivityController;
pub use todo::TodoController;
