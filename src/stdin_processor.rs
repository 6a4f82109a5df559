//! Stdin processing: transform a note piped through the tool

use crate::file_processor::{decode_lenient, transform_text};
use anyhow::Context;
use notefix_lib::exit_codes;
use notefix_lib::transforms::Transform;
use std::io::{self, Read, Write};

/// Read a note from stdin and write the transformed text to stdout.
///
/// With `check`, nothing is written and the returned exit code says whether
/// the input would change.
pub fn process_stdin<T: Transform + ?Sized>(transform: &T, check: bool) -> anyhow::Result<i32> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Error reading from stdin")?;
    let original = decode_lenient(&bytes);

    let modified = transform_text(&original, transform).context("Error processing stdin")?;

    if check {
        if modified != original {
            eprintln!("Would modify: <stdin>");
            return Ok(exit_codes::CHANGES_NEEDED);
        }
        return Ok(exit_codes::SUCCESS);
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(modified.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Error writing output")?;
    Ok(exit_codes::SUCCESS)
}
