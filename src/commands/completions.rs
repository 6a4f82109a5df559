//! Handler for the `completions` command.

use clap::{CommandFactory, ValueEnum};
use clap_complete::{Shell, generate};
use colored::*;
use std::io::stdout;

use notefix_lib::exit_codes::exit;

/// Print a completion script for `shell`, or for the shell named by `$SHELL`.
pub fn handle_completions(shell: Option<Shell>, list: bool) {
    if list {
        println!("Available shells:");
        for shell in Shell::value_variants() {
            println!("  {shell}");
        }
        return;
    }

    let Some(shell) = shell.or_else(Shell::from_env) else {
        eprintln!(
            "{}: Could not detect shell from $SHELL environment variable",
            "Error".red().bold()
        );
        eprintln!("Pass one explicitly, e.g. `notefix completions bash`, or use --list");
        exit::tool_error();
    };

    log::debug!("[notefix-completions] Generating completions for {shell}");
    generate(shell, &mut crate::Cli::command(), "notefix", &mut stdout());
}
