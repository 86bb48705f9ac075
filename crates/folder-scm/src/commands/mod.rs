mod checkout;

use clap::Subcommand;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Stage a source directory into a workspace and write the change log
    Checkout(checkout::CheckoutArgs),
}

impl Commands {
    pub(crate) fn execute(self) -> Result<()> {
        match self {
            Self::Checkout(args) => checkout::run(args),
        }
    }
}
