//! JSON serialization and deserialization utilities.
//!
//! Provides generic functions for reading and writing the persisted
//! record collection as a pretty-printed JSON array.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::Error;

/// Reads a JSON array from a file and deserializes its elements into `T`.
pub fn read_json<T, P>(path: P) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

/// Writes records to a writer as a pretty-printed JSON array.
pub fn write_json<T, W>(writer: W, records: &[T]) -> Result<(), Error>
where
    T: Serialize,
    W: Write,
{
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Serializes records into the file at `path`, replacing its contents.
pub fn write_json_file<T, P>(path: P, records: &[T]) -> Result<(), Error>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("passbook-json-utils-{}-{name}.json", std::process::id()));
        path
    }

    fn sample() -> Account {
        Account {
            name: "Asha".to_owned(),
            age: 25,
            email: "a@x.com".to_owned(),
            pin: 1234,
            account_no: "XYZ123!".to_owned(),
            balance: 42,
        }
    }

    #[test]
    fn test_write_then_read_restores_records() {
        let path = temp_path("roundtrip");
        let records = vec![sample()];

        write_json_file(&path, &records).unwrap();
        let restored: Vec<Account> = read_json(&path).unwrap();
        assert_eq!(restored, records);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_written_file_is_pretty_printed() {
        let path = temp_path("pretty");
        write_json_file(&path, &[sample()]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'), "expected indented output, got: {text}");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let result: Result<Vec<Account>, Error> = read_json(temp_path("missing"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_read_malformed_file_is_json_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "this is not json").unwrap();

        let result: Result<Vec<Account>, Error> = read_json(&path);
        assert!(matches!(result, Err(Error::Json(_))));

        let _ = std::fs::remove_file(&path);
    }
}
