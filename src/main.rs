//! Interactive front-end over the ledger operations.
//!
//! Presents a numbered menu on stdin/stdout, prompts for the fields of
//! the chosen operation, and prints whatever string or record the
//! ledger returns. The backing file path comes from the first argument,
//! defaulting to `data.json` in the working directory.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;

use passbook::{Error, Ledger};

const DEFAULT_STORE: &str = "data.json";

const MENU: &str = "\
1) Create account
2) Deposit money
3) Withdraw money
4) Show details
5) Update details
6) Delete account
7) Quit";

fn main() {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map_or(DEFAULT_STORE, String::as_str).to_owned();

    // A corrupt data file is reported but not fatal; we proceed with an
    // empty store and the next mutation rewrites the file.
    let mut ledger = match Ledger::open(&path) {
        Ok(ledger) => ledger,
        Err(err) => {
            eprintln!("Could not load {path}: {err}");
            eprintln!("Starting with an empty store.");
            Ledger::empty(&path)
        }
    };

    if let Err(err) = run(&mut ledger) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(ledger: &mut Ledger) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{MENU}");
        let Some(choice) = prompt(&mut lines, "Select an operation")? else {
            return Ok(());
        };

        let done = match choice.as_str() {
            "1" => create_account(ledger, &mut lines)?,
            "2" => deposit(ledger, &mut lines)?,
            "3" => withdraw(ledger, &mut lines)?,
            "4" => show_details(ledger, &mut lines)?,
            "5" => update_details(ledger, &mut lines)?,
            "6" => delete_account(ledger, &mut lines)?,
            "7" | "q" => return Ok(()),
            other => {
                println!("Unknown option: {other}");
                false
            }
        };
        if done {
            return Ok(());
        }
        println!();
    }
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

/// Prints a prompt and reads one trimmed line. `None` means stdin was
/// closed and the caller should exit cleanly.
fn prompt(lines: &mut Lines, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_owned())),
        None => Ok(None),
    }
}

/// Prompts until the input parses, re-prompting on bad input instead of
/// aborting the session.
fn prompt_parse<T: FromStr>(lines: &mut Lines, label: &str) -> io::Result<Option<T>> {
    loop {
        let Some(text) = prompt(lines, label)? else {
            return Ok(None);
        };
        match text.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input, try again."),
        }
    }
}

fn report(result: Result<String, Error>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(err) => println!("{err}"),
    }
}

// Each handler returns Ok(true) when stdin closed mid-prompt.

fn create_account(ledger: &mut Ledger, lines: &mut Lines) -> io::Result<bool> {
    let Some(name) = prompt(lines, "Name")? else {
        return Ok(true);
    };
    let Some(age) = prompt_parse::<u8>(lines, "Age")? else {
        return Ok(true);
    };
    let Some(email) = prompt(lines, "Email")? else {
        return Ok(true);
    };
    let Some(pin) = prompt_parse::<u32>(lines, "4-digit PIN")? else {
        return Ok(true);
    };
    report(ledger.create_account(&name, age, &email, pin));
    Ok(false)
}

fn credentials(lines: &mut Lines) -> io::Result<Option<(String, u32)>> {
    let Some(account_no) = prompt(lines, "Account number")? else {
        return Ok(None);
    };
    let Some(pin) = prompt_parse::<u32>(lines, "PIN")? else {
        return Ok(None);
    };
    Ok(Some((account_no, pin)))
}

fn deposit(ledger: &mut Ledger, lines: &mut Lines) -> io::Result<bool> {
    let Some((account_no, pin)) = credentials(lines)? else {
        return Ok(true);
    };
    let Some(amount) = prompt_parse::<u64>(lines, "Amount to deposit")? else {
        return Ok(true);
    };
    report(ledger.deposit(&account_no, pin, amount));
    Ok(false)
}

fn withdraw(ledger: &mut Ledger, lines: &mut Lines) -> io::Result<bool> {
    let Some((account_no, pin)) = credentials(lines)? else {
        return Ok(true);
    };
    let Some(amount) = prompt_parse::<u64>(lines, "Amount to withdraw")? else {
        return Ok(true);
    };
    report(ledger.withdraw(&account_no, pin, amount));
    Ok(false)
}

fn show_details(ledger: &mut Ledger, lines: &mut Lines) -> io::Result<bool> {
    let Some((account_no, pin)) = credentials(lines)? else {
        return Ok(true);
    };
    match ledger.show_details(&account_no, pin) {
        Ok(account) => match serde_json::to_string_pretty(account) {
            Ok(json) => println!("{json}"),
            Err(_) => println!("{account:#?}"),
        },
        Err(err) => println!("{err}"),
    }
    Ok(false)
}

fn update_details(ledger: &mut Ledger, lines: &mut Lines) -> io::Result<bool> {
    let Some((account_no, pin)) = credentials(lines)? else {
        return Ok(true);
    };
    let Some(name) = prompt(lines, "New name (blank to skip)")? else {
        return Ok(true);
    };
    let Some(email) = prompt(lines, "New email (blank to skip)")? else {
        return Ok(true);
    };
    let Some(new_pin) = prompt(lines, "New PIN (blank to skip)")? else {
        return Ok(true);
    };
    let new_pin = new_pin.parse::<u32>().ok();
    report(ledger.update_details(
        &account_no,
        pin,
        Some(name.as_str()),
        Some(email.as_str()),
        new_pin,
    ));
    Ok(false)
}

fn delete_account(ledger: &mut Ledger, lines: &mut Lines) -> io::Result<bool> {
    let Some((account_no, pin)) = credentials(lines)? else {
        return Ok(true);
    };
    report(ledger.delete_account(&account_no, pin));
    Ok(false)
}
