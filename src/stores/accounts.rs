use crate::account::Account;

/// Ordered in-memory collection of account records.
///
/// Lookups are linear scans; the account number + PIN pair is the sole
/// credential, so every read and write goes through an exact match on
/// both fields.
#[derive(Debug, Default)]
pub struct AccountsStore {
    accounts: Vec<Account>,
}

impl AccountsStore {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Wraps a collection loaded from the backing file.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Finds the first record matching both account number and PIN exactly.
    pub fn find(&self, account_no: &str, pin: u32) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.account_no == account_no && a.pin == pin)
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, account_no: &str, pin: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.account_no == account_no && a.pin == pin)
    }

    /// Checks whether any record already uses this account number,
    /// regardless of PIN. Used by the generation collision loop.
    pub fn contains_number(&self, account_no: &str) -> bool {
        self.accounts.iter().any(|a| a.account_no == account_no)
    }

    pub fn push(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Removes and returns the first record matching the credential pair.
    pub fn remove(&mut self, account_no: &str, pin: u32) -> Option<Account> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.account_no == account_no && a.pin == pin)?;
        Some(self.accounts.remove(index))
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
