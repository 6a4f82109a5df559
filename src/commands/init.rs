//! Handler for the `init` command.

use colored::*;
use std::path::Path;

use notefix_lib::config::CONFIG_FILE_NAME;
use notefix_lib::exit_codes::exit;
use notefix_lib::init::create_default_config;

/// Write a commented default `.notefix.toml` into `dir`.
pub fn handle_init(dir: &Path) {
    let path = dir.join(CONFIG_FILE_NAME);
    match create_default_config(&path) {
        Ok(true) => println!("{} {}", "Created".green().bold(), path.display()),
        Ok(false) => {
            eprintln!("{} already exists", path.display());
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
