//! Append-only output buffer with reserved splice points.
//!
//! Text is written as a sequence of chunks. Reserving a [`Mark`] closes the
//! current chunk and opens an empty slot chunk, so content can be filled in
//! at that position later without any offset arithmetic on the text emitted
//! after it.

/// Position reserved in a [`SplicedOutput`] for later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

#[derive(Debug, Default)]
pub struct SplicedOutput {
    chunks: Vec<String>,
}

impl SplicedOutput {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut first = String::new();
        first.reserve(capacity);
        Self { chunks: vec![first] }
    }

    pub fn push(&mut self, c: char) {
        match self.chunks.last_mut() {
            Some(chunk) => chunk.push(c),
            None => self.chunks.push(c.to_string()),
        }
    }

    pub fn push_str(&mut self, s: &str) {
        match self.chunks.last_mut() {
            Some(chunk) => chunk.push_str(s),
            None => self.chunks.push(s.to_string()),
        }
    }

    /// Reserve an empty slot at the current write position.
    pub fn mark(&mut self) -> Mark {
        let slot = self.chunks.len();
        self.chunks.push(String::new());
        self.chunks.push(String::new());
        Mark(slot)
    }

    /// Fill a reserved slot. Text already written after the mark is untouched.
    pub fn fill(&mut self, mark: Mark, text: &str) {
        if let Some(slot) = self.chunks.get_mut(mark.0) {
            slot.push_str(text);
        }
    }

    /// Total length in bytes of everything written so far.
    pub fn len(&self) -> usize {
        self.chunks.iter().map(String::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(String::is_empty)
    }

    pub fn into_string(self) -> String {
        let mut out = String::with_capacity(self.len());
        for chunk in &self.chunks {
            out.push_str(chunk);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_appends() {
        let mut out = SplicedOutput::default();
        out.push_str("abc");
        out.push('d');
        assert_eq!(out.len(), 4);
        assert_eq!(out.into_string(), "abcd");
    }

    #[test]
    fn test_fill_inserts_at_mark() {
        let mut out = SplicedOutput::with_capacity(16);
        out.push_str("```");
        let mark = out.mark();
        out.push_str("\nbody\n```\n");
        out.fill(mark, "rust");
        assert_eq!(out.into_string(), "```rust\nbody\n```\n");
    }

    #[test]
    fn test_marks_do_not_shift_each_other() {
        let mut out = SplicedOutput::default();
        out.push_str("a");
        let first = out.mark();
        out.push_str("b");
        let second = out.mark();
        out.push_str("c");
        out.fill(second, "22");
        out.fill(first, "1");
        assert_eq!(out.into_string(), "a1b22c");
    }

    #[test]
    fn test_empty_fill_is_noop() {
        let mut out = SplicedOutput::default();
        out.push_str("x");
        let mark = out.mark();
        out.push_str("y");
        out.fill(mark, "");
        assert!(!out.is_empty());
        assert_eq!(out.into_string(), "xy");
    }
}
