pub mod access_log;

pub use access_log::{AccessLogEntry, truncate_user_agent};
