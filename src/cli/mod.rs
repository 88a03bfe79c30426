// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `add`  — validates one entry and appends it to the store
//   2. `list` — prints every stored entry (text or --json)
//   3. `menu` — the interactive add / view / exit shell
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

// The interactive menu shell
pub mod menu;

use anyhow::Result;
use clap::Parser;
use commands::{AddArgs, Commands, ListArgs, MenuArgs};

use crate::infra::record_store::record_line;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "user-intake",
    version = "0.1.0",
    about = "Validate, classify, and durably record user entries."
)]
pub struct Cli {
    /// The subcommand to run (add, list, or menu)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    /// The match consumes self, so the handlers are associated
    /// functions taking owned args rather than methods.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add(args)  => Self::run_add(args),
            Commands::List(args) => Self::run_list(args),
            Commands::Menu(args) => Self::run_menu(args),
        }
    }

    /// Handles the `add` subcommand.
    /// Builds store handles from the CLI paths and hands the raw
    /// fields to Layer 2. A rejected entry propagates as an error
    /// (non-zero exit) with the field-specific reason in the
    /// message; the attempt was already logged either way.
    fn run_add(args: AddArgs) -> Result<()> {
        use crate::application::submit_use_case::SubmitUseCase;
        use crate::infra::{attempt_log::AttemptLog, record_store::FileRecordStore};

        let store = FileRecordStore::new(&args.store.store_path);
        let log   = AttemptLog::new(&args.store.log_path);

        let mut use_case = SubmitUseCase::new(store, log);
        let classification = use_case.submit(&args.name, &args.email, &args.age)?;

        println!("User data successfully saved!");
        println!("Name: {}", args.name.trim());
        println!("Email: {}", args.email.trim());
        println!("Age: {}", args.age.trim());
        println!("Category: {classification}");
        Ok(())
    }

    /// Handles the `list` subcommand.
    /// Prints stored entries in append order, as the familiar
    /// text lines or as JSON with --json.
    fn run_list(args: ListArgs) -> Result<()> {
        use crate::application::list_use_case::ListUseCase;
        use crate::infra::record_store::FileRecordStore;

        let use_case = ListUseCase::new(FileRecordStore::new(&args.store.store_path));
        let records  = use_case.execute()?;

        if records.is_empty() {
            println!("No user entries found.");
            return Ok(());
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            println!("=== Saved User Entries ===");
            for record in &records {
                println!("{}", record_line(record));
            }
        }
        Ok(())
    }

    /// Handles the `menu` subcommand — the interactive shell.
    fn run_menu(args: MenuArgs) -> Result<()> {
        menu::run(&args.store.store_path, &args.store.log_path)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// Parse real argument vectors and run them end to end, so the
// dispatch path (which hands each subcommand's owned args to its
// handler) is exercised exactly as main would.
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_run_dispatches_add_then_list() {
        let dir   = tempdir().unwrap();
        let store = dir.path().join("user_data.txt");
        let log   = dir.path().join("app_logs.txt");

        let cli = parse(&[
            "user-intake", "add",
            "--name", "Jane Doe",
            "--email", "jane@example.com",
            "--age", "30",
            "--store-path", store.to_str().unwrap(),
            "--log-path", log.to_str().unwrap(),
        ]);
        cli.run().unwrap();

        let cli = parse(&[
            "user-intake", "list",
            "--store-path", store.to_str().unwrap(),
            "--log-path", log.to_str().unwrap(),
        ]);
        cli.run().unwrap();

        let stored = std::fs::read_to_string(&store).unwrap();
        assert!(stored.contains("Name: Jane Doe"));
        assert!(std::fs::read_to_string(&log).unwrap().contains("ACCEPTED"));
    }

    #[test]
    fn test_run_add_rejection_exits_with_error() {
        let dir   = tempdir().unwrap();
        let store = dir.path().join("user_data.txt");
        let log   = dir.path().join("app_logs.txt");

        let cli = parse(&[
            "user-intake", "add",
            "--name", "J4ne",
            "--email", "jane@example.com",
            "--age", "30",
            "--store-path", store.to_str().unwrap(),
            "--log-path", log.to_str().unwrap(),
        ]);
        assert!(cli.run().is_err());

        // Nothing stored, but the attempt was logged as rejected
        assert!(!store.exists());
        assert!(std::fs::read_to_string(&log).unwrap().contains("REJECTED"));
    }
}
