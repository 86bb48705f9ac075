mod checkout;
mod error;
mod sink;
mod staging_spec;

pub use checkout::{Checkout, FolderScm};
pub use error::{CheckoutError, SpecError};
pub use sink::{ProgressSink, SilentSink, WriterSink};
pub use staging_spec::{StagingSpec, StagingSpecBuilder};

pub type Result<T> = std::result::Result<T, CheckoutError>;
