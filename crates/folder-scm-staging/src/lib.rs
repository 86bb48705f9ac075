mod error;
mod stage;

pub use error::StagingError;
pub use stage::stage;

pub type Result<T> = std::result::Result<T, StagingError>;
