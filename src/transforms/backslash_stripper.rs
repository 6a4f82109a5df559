//! Removes export-inserted backslashes before angle brackets inside fences.
//!
//! A backslash inside a block is dropped when it starts, or belongs to, a run
//! of backslashes that ends right before `<` or `>`. Removing the whole run
//! means a second pass finds nothing left to strip. Text outside fences is
//! never touched.

use super::{Transform, TransformError};
use crate::fence::{self, Emit, FenceHooks};
use std::convert::Infallible;

/// Strip escape backslashes before `<` and `>` inside every fenced block.
pub fn strip(text: &str) -> String {
    match fence::scan(text, &mut StripHooks::default()) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BackslashStripper;

impl BackslashStripper {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for BackslashStripper {
    fn name(&self) -> &'static str {
        "strip"
    }

    fn description(&self) -> &'static str {
        "Remove backslashes escaping '<' and '>' inside fenced code blocks"
    }

    fn apply(&self, content: &str) -> Result<String, TransformError> {
        Ok(strip(content))
    }
}

/// Decision for the backslash run currently being scanned.
///
/// Each run is measured once, on its first backslash; the rest of the run
/// reuses the result.
#[derive(Default)]
struct StripHooks {
    run_end: usize,
    drop_run: bool,
}

impl StripHooks {
    fn start_run(&mut self, index: usize, input: &str) {
        let rest = &input[index..];
        let after = rest.trim_start_matches('\\');
        self.run_end = index + (rest.len() - after.len());
        self.drop_run = matches!(after.chars().next(), Some('<' | '>'));
    }
}

impl FenceHooks for StripHooks {
    type Error = Infallible;

    fn char_in_block(&mut self, c: char, index: usize, input: &str) -> Emit {
        if c != '\\' {
            return Emit::Keep;
        }
        if index >= self.run_end {
            self.start_run(index, input);
        }
        if self.drop_run { Emit::Drop } else { Emit::Keep }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_code_block() {
        let input = "\n```\n\\<html\\>\n\\<html/\\>\n```\n";
        assert_eq!(strip(input), "\n```\n<html>\n<html/>\n```\n");
    }

    #[test]
    fn test_escapes_outside_block_kept() {
        let input = "text outside of code block\n\\<escaped normal text\\>\n```\n\\<b\\>\n```\n\\<after\\>\n";
        let expected = "text outside of code block\n\\<escaped normal text\\>\n```\n<b>\n```\n\\<after\\>\n";
        assert_eq!(strip(input), expected);
    }

    #[test]
    fn test_other_backslashes_kept() {
        let input = "```\nitems.forEach((item) =\\> {\n    console.log(`\\path\\to\\file: ${item}`)\n})\n```\n";
        let expected = "```\nitems.forEach((item) => {\n    console.log(`\\path\\to\\file: ${item}`)\n})\n```\n";
        assert_eq!(strip(input), expected);
    }

    #[test]
    fn test_double_backticks_inside_block() {
        let input = "```\nlog(``\\path\\to\\file: ${item}``) =\\>\n```\n";
        let expected = "```\nlog(``\\path\\to\\file: ${item}``) =>\n```\n";
        assert_eq!(strip(input), expected);
    }

    #[test]
    fn test_backslash_run_before_bracket_removed() {
        assert_eq!(strip("```\na \\\\< b\n```\n"), "```\na < b\n```\n");
        assert_eq!(strip("```\n\\\\\\>\n```\n"), "```\n>\n```\n");
    }

    #[test]
    fn test_long_backslash_runs() {
        let run = "\\".repeat(100_000);

        let input = format!("```\n{run}<x\n```\n");
        assert_eq!(strip(&input), "```\n<x\n```\n");

        let input = format!("```\n{run}x\n```\n");
        assert_eq!(strip(&input), input);

        // A kept run followed by a dropped one in the same block
        let input = format!("```\n{run}x {run}>\n```\n");
        assert_eq!(strip(&input), format!("```\n{run}x >\n```\n"));
    }

    #[test]
    fn test_trailing_backslash_in_block() {
        let input = "```\nC:\\";
        assert_eq!(strip(input), input);
    }

    #[test]
    fn test_unterminated_block_still_stripped() {
        assert_eq!(strip("```\n\\<open\n"), "```\n<open\n");
    }

    #[test]
    fn test_idempotent() {
        let input = "x \\<y\\>\n```\n\\\\<a\\> \\q\n```\n";
        let once = strip(input);
        assert_eq!(strip(&once), once);
    }

    #[test]
    fn test_transform_trait() {
        let stripper = BackslashStripper::new();
        assert_eq!(stripper.name(), "strip");
        assert_eq!(stripper.apply("```\n\\<p\\>\n```").unwrap(), "```\n<p>\n```");
    }
}
