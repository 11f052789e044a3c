//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use crate::audit::report::run_audit;
use crate::core::model::AuditError;
use crate::core::paths::{resolve_root, AuditPaths};

/// token-audit - count word tokens in a log sample after stripping ANSI colors.
#[derive(Parser, Debug)]
#[command(name = "token-audit")]
#[command(
    author,
    version,
    about,
    long_about = r#"token-audit reads samples/B.txt under ROOT, strips ANSI color codes,
and counts every word token (letters, digits, underscore).

The listing is printed by descending count, ties ordered by token, and the
same list is written to samples/tokens-audit.json.

Exit status is 1 when the samples directory or B.txt is missing.

Examples:
    token-audit
    token-audit --root path/to/project
    token-audit --verbose
"#
)]
pub struct Cli {
    /// Project root containing the samples directory.
    #[arg(
        long,
        env = "TOKEN_AUDIT_ROOT",
        default_value = ".",
        value_name = "ROOT",
        long_help = "Project root containing the samples directory (defaults to the current directory).\n\n\
The audit reads ROOT/samples/B.txt and writes ROOT/samples/tokens-audit.json."
    )]
    pub root: PathBuf,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Error prefixes are otherwise colored when\n\
the terminal supports ANSI colors."
    )]
    pub no_color: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG takes precedence when set."
    )]
    pub verbose: bool,
}

/// Run the audit and return the process exit status
pub fn run(cli: Cli) -> Result<i32> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let root = resolve_root(&cli.root);
    let paths = AuditPaths::from_root(root);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match run_audit(&paths, &mut out) {
        Ok(summary) => {
            tracing::debug!(
                unique = summary.unique,
                total = summary.total,
                "audit complete"
            );
            0
        }
        Err(err) => {
            tracing::debug!(code = err.code(), "audit failed");
            report_error(&mut out, &err)?;
            err.exit_code()
        }
    };

    out.flush().context("Failed to flush stdout")?;
    Ok(code)
}

fn report_error<W: Write>(out: &mut W, err: &AuditError) -> Result<()> {
    writeln!(out, "{} {}", "Error:".red().bold(), err).context("Failed to write error message")
}
