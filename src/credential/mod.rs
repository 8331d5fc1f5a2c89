mod error;
mod extract;
mod select;
mod service;
mod types;
mod validate;

pub use error::*;
pub use extract::{account_at, accounts};
pub use select::{classify, select, select_account};
pub use service::{resolve, CredentialManager};
pub use types::*;
pub use validate::validate;
