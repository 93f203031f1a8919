pub mod accounts;
pub mod signers;

pub use accounts::*;
pub use signers::TransactionSigners;
