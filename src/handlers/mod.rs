pub mod console;
pub mod messages;
pub mod report;
