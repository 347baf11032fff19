//! CLI module for standin
//!
//! ## Commands
//!
//! - `test [SUITE]...` - Run built-in case tables against test doubles
//! - `list [SUITE]...` - List case names without running them
//! - `check-user --users FILE EMAIL` - Run `ensure_new_user` against a file-backed store
//! - `fetch --recordings FILE QUERY` - Run `fetch_text` against recorded API responses
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::harness::RunConfig;
use crate::version::STANDIN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a diagnostic (code, help, source chain) as the message.
    pub fn diagnostic(err: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Contract-checked test doubles and table-driven cases
#[derive(Parser, Debug)]
#[command(name = "standin")]
#[command(version = STANDIN_VERSION)]
#[command(about = "Run table-driven cases against capability test doubles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run built-in case tables (all suites when none are named)
    Test {
        /// Suites to run
        #[arg(value_name = "SUITE")]
        suites: Vec<String>,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
        /// Stop on first failure
        #[arg(short = 'x', long = "exitfirst")]
        stop_on_fail: bool,
        /// Filter cases by keyword
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
        /// Number of worker threads [default: 1]
        #[arg(short = 'j', long = "jobs", value_name = "N")]
        jobs: Option<usize>,
        /// Disable ANSI colours
        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// List case names without running them
    List {
        /// Suites to list
        #[arg(value_name = "SUITE")]
        suites: Vec<String>,
        /// Filter cases by keyword
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
    },

    /// Check whether an email can be registered against a user list file
    CheckUser {
        /// Newline-separated list of existing emails
        #[arg(long = "users", value_name = "FILE")]
        users: PathBuf,
        /// Email to register
        #[arg(value_name = "EMAIL")]
        email: String,
    },

    /// Fetch a query's text from recorded API responses
    Fetch {
        /// JSON file of recorded responses
        #[arg(long = "recordings", value_name = "FILE")]
        recordings: PathBuf,
        /// Query to fetch
        #[arg(value_name = "QUERY")]
        query: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Test {
            suites,
            verbose,
            stop_on_fail,
            filter,
            jobs,
            no_color,
        } => {
            let base = RunConfig::new()
                .with_verbose(verbose)
                .with_stop_on_fail(stop_on_fail)
                .with_color(!no_color && std::io::stderr().is_terminal());
            let config = resolve_config(base, filter, jobs, |key| std::env::var(key).ok());
            commands::run_suites(&suites, config)
        }
        Command::List { suites, filter } => {
            let config = resolve_config(RunConfig::new(), filter, None, |key| std::env::var(key).ok());
            commands::list_cases(&suites, config.filter.as_deref())
        }
        Command::CheckUser { users, email } => commands::check_user(&users, &email),
        Command::Fetch { recordings, query } => commands::fetch(&recordings, &query),
    }
}

/// Layer environment overrides onto `base`, then explicit flags on top.
///
/// Flags win over the environment; an absent flag leaves the environment (or default) in place.
pub fn resolve_config(
    base: RunConfig,
    filter: Option<String>,
    jobs: Option<usize>,
    lookup: impl Fn(&str) -> Option<String>,
) -> RunConfig {
    let mut config = base.with_overrides_from(lookup);
    if let Some(keyword) = filter {
        config = config.with_filter(Some(keyword));
    }
    if let Some(jobs) = jobs {
        config = config.with_jobs(jobs);
    }
    config
}

// ============================================================================
// Tests
// ============================================================================
