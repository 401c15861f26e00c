pub mod entity;
pub mod repository;

pub use entity::{LogAction, LogEntry, NewLogEntry};
pub use repository::LogEntryRepository;
