//! Storage layer for the account ledger. Provides storage for:
//! - Account records and their balances ([`AccountsStore`])
//!
//! Current implementation is a flat ordered collection with linear
//! scans, optimized for synchronous, direct memory access.

mod accounts;

pub use accounts::AccountsStore;
