//! The operations layer: create, deposit, withdraw, view, update, delete.
//!
//! A [`Ledger`] owns the in-memory [`AccountsStore`] and the path of the
//! backing JSON file. Every mutating operation rewrites the full
//! collection to disk before returning, so the file always mirrors
//! memory. Operations take `&mut self`, which makes the single-caller
//! assumption a compile-time fact rather than a runtime convention.

use std::path::{Path, PathBuf};

use crate::account::{generate_account_no, pin_is_valid, Account};
use crate::json_utils::{read_json, write_json_file};
use crate::stores::AccountsStore;
use crate::Error;

/// Single-transaction deposit cap.
pub const DEPOSIT_LIMIT: u64 = 10_000;

/// Minimum account holder age at creation. Not re-checked afterwards.
pub const MINIMUM_AGE: u8 = 18;

pub struct Ledger {
    accounts: AccountsStore,
    path: PathBuf,
}

impl Ledger {
    /// Opens the ledger backed by the file at `path`.
    ///
    /// An absent file yields an empty ledger; an unreadable or malformed
    /// file yields an error so the caller can decide between aborting
    /// and proceeding with [`Ledger::empty`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let accounts = if path.exists() {
            AccountsStore::from_accounts(read_json(&path)?)
        } else {
            AccountsStore::new()
        };
        Ok(Self { accounts, path })
    }

    /// Creates a ledger with no records, ignoring whatever is at `path`.
    /// The next mutation overwrites the file.
    pub fn empty<P: AsRef<Path>>(path: P) -> Self {
        Self {
            accounts: AccountsStore::new(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Validates the applicant, generates a collision-free account
    /// number, and appends a record with balance 0.
    pub fn create_account(
        &mut self,
        name: &str,
        age: u8,
        email: &str,
        pin: u32,
    ) -> Result<String, Error> {
        if age < MINIMUM_AGE {
            return Err(Error::Underage);
        }
        if !pin_is_valid(pin) {
            return Err(Error::InvalidPin);
        }

        let account_no = self.unique_account_no();
        self.accounts.push(Account {
            name: name.to_owned(),
            age,
            email: email.to_owned(),
            pin,
            account_no: account_no.clone(),
            balance: 0,
        });
        self.persist()?;
        Ok(format!(
            "Account created successfully. Account No: {account_no}"
        ))
    }

    /// Adds to the balance. The amount must be positive and within the
    /// single-transaction cap.
    pub fn deposit(&mut self, account_no: &str, pin: u32, amount: u64) -> Result<String, Error> {
        let account = self.find_user(account_no, pin)?;
        if amount == 0 || amount > DEPOSIT_LIMIT {
            return Err(Error::AmountOutOfRange);
        }

        account.balance += amount;
        let balance = account.balance;
        self.persist()?;
        Ok(format!(
            "Deposited {amount} successfully. New balance: {balance}"
        ))
    }

    /// Subtracts from the balance. The amount must be positive and no
    /// greater than the current balance.
    pub fn withdraw(&mut self, account_no: &str, pin: u32, amount: u64) -> Result<String, Error> {
        let account = self.find_user(account_no, pin)?;
        if amount == 0 {
            return Err(Error::AmountMustBePositive);
        }
        if account.balance < amount {
            return Err(Error::InsufficientFunds);
        }

        account.balance -= amount;
        let balance = account.balance;
        self.persist()?;
        Ok(format!(
            "Withdrew {amount} successfully. Remaining balance: {balance}"
        ))
    }

    /// Read-only lookup of the full record behind the credential pair.
    pub fn show_details(&self, account_no: &str, pin: u32) -> Result<&Account, Error> {
        self.accounts
            .find(account_no, pin)
            .ok_or(Error::AccountNotFound)
    }

    /// Overwrites name and email when given non-empty replacements.
    /// A replacement PIN outside the 4-digit format is skipped, not an
    /// error.
    pub fn update_details(
        &mut self,
        account_no: &str,
        pin: u32,
        name: Option<&str>,
        email: Option<&str>,
        new_pin: Option<u32>,
    ) -> Result<String, Error> {
        let account = self.find_user(account_no, pin)?;

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            account.name = name.to_owned();
        }
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            account.email = email.to_owned();
        }
        if let Some(new_pin) = new_pin.filter(|p| pin_is_valid(*p)) {
            account.pin = new_pin;
        }

        self.persist()?;
        Ok("Details updated successfully.".to_owned())
    }

    /// Removes exactly one record matching the credential pair.
    pub fn delete_account(&mut self, account_no: &str, pin: u32) -> Result<String, Error> {
        self.accounts
            .remove(account_no, pin)
            .ok_or(Error::AccountNotFound)?;
        self.persist()?;
        Ok("Account deleted successfully.".to_owned())
    }

    /// All records, in insertion order.
    pub fn accounts(&self) -> &[Account] {
        self.accounts.accounts()
    }

    /// The authorization check shared by every operation: possession of
    /// the account number + PIN pair is the sole credential.
    fn find_user(&mut self, account_no: &str, pin: u32) -> Result<&mut Account, Error> {
        self.accounts
            .find_mut(account_no, pin)
            .ok_or(Error::AccountNotFound)
    }

    /// Generation does not guarantee uniqueness on its own, so retry
    /// until the candidate is unused. With 26^3 * 10^3 * 6 combinations
    /// a collision at toy scale is rare; the loop makes it harmless.
    fn unique_account_no(&self) -> String {
        loop {
            let candidate = generate_account_no();
            if !self.accounts.contains_number(&candidate) {
                return candidate;
            }
        }
    }

    fn persist(&self) -> Result<(), Error> {
        write_json_file(&self.path, self.accounts.accounts())
    }
}
