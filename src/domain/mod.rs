pub mod forms;
pub mod report;
pub mod shared_fields;
pub mod types;
