//! Command handlers for the notefix CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod completions;
pub mod init;
pub mod run;
pub mod version;
