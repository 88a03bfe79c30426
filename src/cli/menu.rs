// ============================================================
// Layer 1 — Interactive Menu Shell
// ============================================================
// A thin adapter over the use cases: numbered options for add /
// view / exit, with per-field re-prompting until the field
// validates. The loop holds no rules of its own — every check
// it makes is a call into the domain validators, and the final
// submit revalidates everything anyway before anything is
// stored.
//
// Ctrl-D (end of input) anywhere exits cleanly, the same as
// choosing option 3.
//
// Reference: Rust Book §12 (Reading User Input)

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::application::list_use_case::ListUseCase;
use crate::application::submit_use_case::SubmitUseCase;
use crate::domain::error::ValidationError;
use crate::domain::log_entry::LogEntry;
use crate::domain::traits::AttemptSink;
use crate::domain::validators::{validate_age, validate_email, validate_name};
use crate::infra::record_store::{record_line, FileRecordStore};
use crate::infra::attempt_log::AttemptLog;

/// Run the interactive menu until the user exits.
pub fn run(store_path: &str, log_path: &str) -> Result<()> {
    tracing::info!("Interactive session started");

    let stdin      = io::stdin();
    let mut input  = stdin.lock();

    loop {
        println!();
        println!("User Intake Utility");
        println!("1. Add new entry");
        println!("2. View all entries");
        println!("3. Exit");

        let Some(choice) = prompt(&mut input, "Please select an option (1-3): ")? else {
            break; // end of input
        };

        match choice.trim() {
            "1" => add_entry(&mut input, store_path, log_path)?,
            "2" => view_entries(store_path)?,
            "3" => break,
            other => {
                println!("Invalid choice. Please enter a number between 1 and 3.");
                tracing::warn!("Invalid menu choice entered: {other:?}");
            }
        }
    }

    println!("Exiting the program. Goodbye!");
    tracing::info!("Interactive session exited by user");
    Ok(())
}

/// Collect one entry field by field, re-prompting each field
/// until it validates, then submit the whole record.
fn add_entry(input: &mut impl BufRead, store_path: &str, log_path: &str) -> Result<()> {
    println!();
    println!("=== Add New User Entry ===");

    // One log handle for the whole entry: every invalid input
    // during re-prompting becomes a rejected attempt in the log,
    // and the same handle then records the final submission
    let mut log = AttemptLog::new(log_path);

    let Some(name) = read_field(input, &mut log, "Enter your full name: ", validate_name)?
    else {
        return Ok(());
    };

    let Some(email) = read_field(input, &mut log, "Enter your email: ", validate_email)? else {
        return Ok(());
    };

    let Some(age) = read_field(input, &mut log, "Enter your age: ", |s| {
        validate_age(s).map(|_| ())
    })?
    else {
        return Ok(());
    };

    // The fields are individually valid by now, so submit can
    // only fail on I/O — which should stop the session
    let store = FileRecordStore::new(store_path);
    let mut use_case = SubmitUseCase::new(store, log);

    let classification = use_case
        .submit(&name, &email, &age)
        .context("cannot save the entry")?;

    println!();
    println!("User data successfully saved!");
    println!("Name: {}", name.trim());
    println!("Email: {}", email.trim());
    println!("Age: {}", age.trim());
    println!("Category: {classification}");
    Ok(())
}

/// Print every stored entry, or a friendly message for an
/// empty store.
fn view_entries(store_path: &str) -> Result<()> {
    let use_case = ListUseCase::new(FileRecordStore::new(store_path));
    let records  = use_case.execute()?;

    if records.is_empty() {
        println!("No user entries found.");
        return Ok(());
    }

    println!();
    println!("=== Saved User Entries ===");
    for record in &records {
        println!("{}", record_line(record));
    }
    Ok(())
}

/// Prompt until `check` accepts the trimmed input. Every
/// rejected input is appended to the attempt log AND printed
/// with its field-specific reason before re-prompting — an
/// attempt is an attempt, whether it came from a flag or a
/// prompt. Returns None on end of input.
fn read_field(
    input: &mut impl BufRead,
    log:   &mut impl AttemptSink,
    label: &str,
    check: impl Fn(&str) -> Result<(), ValidationError>,
) -> Result<Option<String>> {
    loop {
        let Some(raw) = prompt(input, label)? else {
            return Ok(None);
        };
        let value = raw.trim().to_string();
        match check(&value) {
            Ok(()) => return Ok(Some(value)),
            Err(reason) => {
                log.log_attempt(&LogEntry::rejected(reason.clone()))
                    .context("cannot write to the attempt log")?;
                println!("{reason}");
            }
        }
    }
}

/// Print a label, flush, and read one line.
/// Returns None when the input stream is closed.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().context("cannot flush stdout")?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("cannot read input")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// The entry flow reads from any BufRead, so these drive it with
// a scripted Cursor instead of a terminal.
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_each_rejected_prompt_is_logged() {
        let dir   = tempdir().unwrap();
        let store = dir.path().join("user_data.txt");
        let log   = dir.path().join("app_logs.txt");

        // One invalid value per field before the valid one
        let script    = "J4ne\nJane Doe\njane.example.com\njane@example.com\n-5\n30\n";
        let mut input = Cursor::new(script);

        add_entry(&mut input, store.to_str().unwrap(), log.to_str().unwrap()).unwrap();

        let log_text = std::fs::read_to_string(&log).unwrap();
        let rejected: Vec<&str> = log_text.lines().filter(|l| l.contains("REJECTED")).collect();
        assert_eq!(rejected.len(), 3);
        assert!(rejected[0].contains("name"));
        assert!(rejected[1].contains("email"));
        assert!(rejected[2].contains("age"));

        // The eventual success is logged once and stored once
        assert_eq!(log_text.lines().filter(|l| l.contains("ACCEPTED")).count(), 1);
        let stored = std::fs::read_to_string(&store).unwrap();
        assert_eq!(stored.lines().count(), 1);
        assert!(stored.contains("Name: Jane Doe"));
    }

    #[test]
    fn test_end_of_input_leaves_store_untouched() {
        let dir   = tempdir().unwrap();
        let store = dir.path().join("user_data.txt");
        let log   = dir.path().join("app_logs.txt");

        // A rejected name, then the stream closes mid-entry
        let mut input = Cursor::new("J4ne\n");
        add_entry(&mut input, store.to_str().unwrap(), log.to_str().unwrap()).unwrap();

        assert!(!store.exists());
        assert!(std::fs::read_to_string(&log).unwrap().contains("REJECTED"));
    }

    #[test]
    fn test_clean_entry_logs_no_rejections() {
        let dir   = tempdir().unwrap();
        let store = dir.path().join("user_data.txt");
        let log   = dir.path().join("app_logs.txt");

        let mut input = Cursor::new("Sam\nsam@x.org\n65\n");
        add_entry(&mut input, store.to_str().unwrap(), log.to_str().unwrap()).unwrap();

        let log_text = std::fs::read_to_string(&log).unwrap();
        assert!(!log_text.contains("REJECTED"));
        assert_eq!(log_text.lines().filter(|l| l.contains("ACCEPTED")).count(), 1);
    }
}
