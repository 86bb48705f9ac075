mod error;
mod format;
mod record;

pub use error::ChangeLogError;
pub use format::{escape_xml, format_change_log};
pub use record::ChangeLogRecord;

pub type Result<T> = std::result::Result<T, ChangeLogError>;
