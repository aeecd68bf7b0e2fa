mod account;
mod error;
mod json_utils;
mod ledger;
mod stores;

pub use account::{generate_account_no, pin_is_valid, Account, ACCOUNT_NO_SYMBOLS};
pub use error::Error;
pub use ledger::{Ledger, DEPOSIT_LIMIT, MINIMUM_AGE};
pub use stores::AccountsStore;
