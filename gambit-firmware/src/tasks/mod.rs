//! Embassy tasks

pub mod command;
pub mod controller;
pub mod notify;

pub use command::command_task;
pub use controller::controller_task;
pub use notify::notify_task;
