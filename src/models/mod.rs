pub mod category;
pub mod task;
pub mod user;

pub use category::Category;
pub use task::{Task, TaskInput};
pub use user::User;
