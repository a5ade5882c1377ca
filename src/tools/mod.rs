// Modular tools
pub mod fetch;
pub mod forms;
pub mod report;
