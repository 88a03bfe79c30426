// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `add`, `list`, and `menu`,
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - default values for the store and log paths
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one entry and append it to the store
    Add(AddArgs),

    /// Print every stored entry in append order
    List(ListArgs),

    /// Run the interactive menu (add / view / exit)
    Menu(MenuArgs),
}

/// Shared flags: where the two append targets live.
/// Defaults match the files this tool has always written.
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Path of the record store (accepted entries)
    #[arg(long, default_value = "user_data.txt")]
    pub store_path: String,

    /// Path of the attempt log (one line per attempt)
    #[arg(long, default_value = "app_logs.txt")]
    pub log_path: String,
}

/// All arguments for the `add` command.
/// The raw field values arrive as strings — validation and
/// parsing happen in the domain layer, never here.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Full name (letters and spaces only)
    #[arg(long)]
    pub name: String,

    /// Email address (local@domain.tld)
    #[arg(long)]
    pub email: String,

    /// Age in years (positive integer)
    #[arg(long)]
    pub age: String,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// All arguments for the `list` command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the entries as a JSON array instead of text lines
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// All arguments for the `menu` command
#[derive(Args, Debug)]
pub struct MenuArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}
