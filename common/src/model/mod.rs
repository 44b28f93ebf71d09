pub mod choice;
pub mod requirement;
pub mod snapshot;
pub mod template;
