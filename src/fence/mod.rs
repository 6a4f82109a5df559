//! Single-pass fenced code block scanner.
//!
//! The scanner walks the input one character at a time and tracks whether
//! the cursor is inside a block fenced by runs of three backticks. It does
//! not parse Markdown: a delimiter is any group of exactly
//! [`FENCE_BACKTICK_COUNT`] consecutive backticks, matched greedily from the
//! left. A group completes on the character that follows its third backtick
//! (or at end of input), so a run of four backticks is one delimiter followed
//! by the start of a new count.
//!
//! Transformations plug into the scan through [`FenceHooks`]:
//!
//! - [`FenceHooks::enter_block`] fires when a block opens, before the
//!   character that completed the opening delimiter is emitted.
//! - [`FenceHooks::char_in_block`] sees every character while inside a block,
//!   including the backticks of the closing delimiter, and may drop it.
//! - [`FenceHooks::exit_block`] fires when a block closes, before the
//!   character that completed the closing delimiter is emitted.
//!
//! An unterminated block at end of input never reaches `exit_block`; its text
//! passes through unchanged.

mod output;

pub use output::{Mark, SplicedOutput};

/// Number of consecutive backticks that make one fence delimiter.
pub const FENCE_BACKTICK_COUNT: usize = 3;

const BACKTICK: char = '`';

/// A completed fence delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceEvent {
    Open,
    Close,
}

/// Whether a character seen inside a block is written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Keep,
    Drop,
}

/// Extension points a transformation implements to specialize the scan.
pub trait FenceHooks {
    type Error;

    /// Called when a block opens. `index` is the byte offset in `input` of the
    /// character right after the opening delimiter (`input.len()` at end of
    /// input); nothing at or after it has been emitted yet.
    fn enter_block(&mut self, _index: usize, _input: &str, _output: &mut SplicedOutput) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for each character inside a block. `index` is its byte offset in `input`.
    fn char_in_block(&mut self, _c: char, _index: usize, _input: &str) -> Emit {
        Emit::Keep
    }

    /// Called when a block closes, before the following character is emitted.
    fn exit_block(&mut self, _output: &mut SplicedOutput) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Delimiter counting state, independent of any transformation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    consecutive_backticks: usize,
    in_code_block: bool,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    pub fn consecutive_backticks(&self) -> usize {
        self.consecutive_backticks
    }

    /// Feed the next character. Returns the delimiter completed by reaching it, if any.
    pub fn advance(&mut self, c: char) -> Option<FenceEvent> {
        let event = self.complete_delimiter();
        if c == BACKTICK {
            self.consecutive_backticks += 1;
        } else {
            self.consecutive_backticks = 0;
        }
        event
    }

    /// Signal end of input, completing a trailing delimiter.
    pub fn finish(&mut self) -> Option<FenceEvent> {
        let event = self.complete_delimiter();
        self.consecutive_backticks = 0;
        event
    }

    fn complete_delimiter(&mut self) -> Option<FenceEvent> {
        if self.consecutive_backticks != FENCE_BACKTICK_COUNT {
            return None;
        }
        self.consecutive_backticks = 0;
        self.in_code_block = !self.in_code_block;
        Some(if self.in_code_block {
            FenceEvent::Open
        } else {
            FenceEvent::Close
        })
    }
}

/// Run `hooks` over `input` and return the rebuilt text.
pub fn scan<H: FenceHooks>(input: &str, hooks: &mut H) -> Result<String, H::Error> {
    let mut state = ScanState::new();
    let mut output = SplicedOutput::with_capacity(input.len());

    for (index, c) in input.char_indices() {
        match state.advance(c) {
            Some(FenceEvent::Open) => hooks.enter_block(index, input, &mut output)?,
            Some(FenceEvent::Close) => hooks.exit_block(&mut output)?,
            None => {}
        }

        if state.in_code_block() && hooks.char_in_block(c, index, input) == Emit::Drop {
            continue;
        }
        output.push(c);
    }

    match state.finish() {
        Some(FenceEvent::Open) => hooks.enter_block(input.len(), input, &mut output)?,
        Some(FenceEvent::Close) => hooks.exit_block(&mut output)?,
        None => {}
    }

    Ok(output.into_string())
}

/// Byte offsets at which delimiters complete, paired with the event.
///
/// Offsets point at the character following the delimiter (`input.len()`
/// for a delimiter that ends the input).
pub fn fence_events(input: &str) -> Vec<(usize, FenceEvent)> {
    let mut state = ScanState::new();
    let mut events: Vec<(usize, FenceEvent)> = input
        .char_indices()
        .filter_map(|(index, c)| state.advance(c).map(|event| (index, event)))
        .collect();
    if let Some(event) = state.finish() {
        events.push((input.len(), event));
    }
    events
}
