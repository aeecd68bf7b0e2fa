use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The fixed set of special characters allowed in an account number.
pub const ACCOUNT_NO_SYMBOLS: [char; 6] = ['!', '@', '#', '$', '%', '*'];

/// A single customer's stored record: identity, credential, balance.
///
/// Field names in the persisted JSON match the historical data file,
/// so `account_no` serializes as `accountNo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub age: u8,
    pub email: String,
    pub pin: u32,
    #[serde(rename = "accountNo")]
    pub account_no: String,
    pub balance: u64,
}

/// A PIN is valid when its decimal rendering is exactly 4 digits.
pub fn pin_is_valid(pin: u32) -> bool {
    (1000..=9999).contains(&pin)
}

/// Generates a 7-character account number: 3 random uppercase letters,
/// 3 random digits, and 1 symbol from [`ACCOUNT_NO_SYMBOLS`], shuffled.
///
/// Uniqueness against existing records is the caller's responsibility;
/// the ledger retries generation on collision.
pub fn generate_account_no() -> String {
    let mut rng = rand::thread_rng();
    let mut chars: Vec<char> = Vec::with_capacity(7);
    for _ in 0..3 {
        chars.push(rng.gen_range('A'..='Z'));
    }
    for _ in 0..3 {
        chars.push(rng.gen_range('0'..='9'));
    }
    chars.push(ACCOUNT_NO_SYMBOLS[rng.gen_range(0..ACCOUNT_NO_SYMBOLS.len())]);
    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_account_no_format(s: &str) -> bool {
        let letters = s.chars().filter(|c| c.is_ascii_uppercase()).count();
        let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
        let symbols = s.chars().filter(|c| ACCOUNT_NO_SYMBOLS.contains(c)).count();
        s.chars().count() == 7 && letters == 3 && digits == 3 && symbols == 1
    }

    #[test]
    fn test_generated_numbers_match_format() {
        for _ in 0..100 {
            let acc = generate_account_no();
            assert!(is_account_no_format(&acc), "bad account number: {acc}");
        }
    }

    #[test]
    fn test_pin_validity_bounds() {
        assert!(!pin_is_valid(0));
        assert!(!pin_is_valid(999));
        assert!(pin_is_valid(1000));
        assert!(pin_is_valid(1234));
        assert!(pin_is_valid(9999));
        assert!(!pin_is_valid(10000));
    }

    #[test]
    fn test_account_serializes_with_historical_field_names() {
        let account = Account {
            name: "Asha".to_owned(),
            age: 25,
            email: "a@x.com".to_owned(),
            pin: 1234,
            account_no: "A1B2C%3".to_owned(),
            balance: 500,
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["accountNo"], "A1B2C%3");
        assert_eq!(json["balance"], 500);

        let back: Account = serde_json::from_value(json).unwrap();
        assert_eq!(back, account);
    }
}
