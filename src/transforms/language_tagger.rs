//! Adds a language token to fenced code blocks that lack one.
//!
//! When a block opens, the tagger peeks past any spaces after the opening
//! backticks. Anything other than a line break there is an existing
//! language token and the block is left alone. Otherwise the block text is
//! buffered, and when the block closes the classifier's label (lowercased)
//! is spliced in right after the opening backticks, so
//!
//! ~~~text
//! ```            ```python
//! def f():   ->  def f():
//! ```            ```
//! ~~~
//!
//! Unterminated blocks are never classified.

use super::{Transform, TransformError};
use crate::classifier::{Classifier, ClassifierError};
use crate::fence::{self, Emit, FENCE_BACKTICK_COUNT, FenceHooks, Mark, SplicedOutput};

/// Tag every untagged, terminated fence in `text` using `classifier`.
pub fn tag<C: Classifier + ?Sized>(text: &str, classifier: &C) -> Result<String, ClassifierError> {
    let mut hooks = TaggerHooks::new(classifier);
    fence::scan(text, &mut hooks)
}

/// [`Transform`] wrapper owning its classifier.
pub struct LanguageTagger<C> {
    classifier: C,
}

impl<C: Classifier> LanguageTagger<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }
}

impl<C: Classifier> Transform for LanguageTagger<C> {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn description(&self) -> &'static str {
        "Add a detected language to fenced code blocks without one"
    }

    fn apply(&self, content: &str) -> Result<String, TransformError> {
        Ok(tag(content, &self.classifier)?)
    }
}

struct TaggerHooks<'a, C: ?Sized> {
    classifier: &'a C,
    label_slot: Option<Mark>,
    code_block_text: String,
    skip_addition: bool,
}

impl<'a, C: Classifier + ?Sized> TaggerHooks<'a, C> {
    fn new(classifier: &'a C) -> Self {
        Self {
            classifier,
            label_slot: None,
            code_block_text: String::new(),
            skip_addition: false,
        }
    }
}

/// Whether the opening fence ending just before `rest` already names a language.
fn has_language_token(rest: &str) -> bool {
    rest.chars()
        .find(|&c| c != ' ')
        .is_some_and(|c| c != '\n' && c != '\r')
}

impl<C: Classifier + ?Sized> FenceHooks for TaggerHooks<'_, C> {
    type Error = ClassifierError;

    fn enter_block(&mut self, index: usize, input: &str, output: &mut SplicedOutput) -> Result<(), Self::Error> {
        self.label_slot = Some(output.mark());
        self.code_block_text.clear();
        self.skip_addition = has_language_token(&input[index..]);
        Ok(())
    }

    fn char_in_block(&mut self, c: char, _index: usize, _input: &str) -> Emit {
        self.code_block_text.push(c);
        Emit::Keep
    }

    fn exit_block(&mut self, output: &mut SplicedOutput) -> Result<(), Self::Error> {
        let slot = self.label_slot.take();
        if self.skip_addition {
            log::debug!("[notefix-tag] Block already has a language, skipping");
        } else if let Some(slot) = slot {
            let keep = self.code_block_text.len().saturating_sub(FENCE_BACKTICK_COUNT);
            self.code_block_text.truncate(keep);

            let label = self.classifier.classify(&self.code_block_text)?.to_lowercase();
            log::debug!(
                "[notefix-tag] Classified {} byte block as '{label}'",
                self.code_block_text.len()
            );
            output.fill(slot, &label);
        }

        self.skip_addition = false;
        self.code_block_text.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn fixed(label: &'static str) -> impl Fn(&str) -> String {
        move |_: &str| label.to_string()
    }

    #[test]
    fn test_tags_untagged_block() {
        let out = tag("```\nfn main() {}\n```\n", &fixed("rust")).unwrap();
        assert_eq!(out, "```rust\nfn main() {}\n```\n");
    }

    #[test]
    fn test_classifier_sees_block_without_closing_fence() {
        let seen = RefCell::new(Vec::new());
        let classifier = |code: &str| {
            seen.borrow_mut().push(code.to_string());
            "x".to_string()
        };
        tag("```\nline one\nline two\n```\n", &classifier).unwrap();
        assert_eq!(seen.into_inner(), vec!["\nline one\nline two\n".to_string()]);
    }

    #[test]
    fn test_label_is_lowercased() {
        let out = tag("```\nSELECT 1\n```\n", &fixed("SQL")).unwrap();
        assert_eq!(out, "```sql\nSELECT 1\n```\n");
    }

    #[test]
    fn test_existing_language_kept() {
        let text = "```rust\nfn main() {}\n```\n";
        let out = tag(text, &|_: &str| -> String { panic!("classifier must not run") }).unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn test_existing_language_after_spaces_kept() {
        let text = "```   rust\nfn main() {}\n```\n";
        assert_eq!(tag(text, &fixed("python")).unwrap(), text);
    }

    #[test]
    fn test_trailing_spaces_after_fence_still_tagged() {
        let out = tag("``` \ncode\n```\n", &fixed("rust")).unwrap();
        assert_eq!(out, "```rust \ncode\n```\n");
        let out = tag("```   \ncode\n```\n", &fixed("rust")).unwrap();
        assert_eq!(out, "```rust   \ncode\n```\n");
    }

    #[test]
    fn test_empty_label_is_noop() {
        let text = "```\n???\n```\n";
        assert_eq!(tag(text, &fixed("")).unwrap(), text);
    }

    #[test]
    fn test_each_block_classified_independently() {
        let calls = RefCell::new(0);
        let classifier = |code: &str| {
            *calls.borrow_mut() += 1;
            if code.contains("<html>") { "html".to_string() } else { "rust".to_string() }
        };
        let text = "```\nfn a() {}\n```\ntext\n```\n<html>\n```\n";
        let out = tag(text, &classifier).unwrap();
        assert_eq!(out, "```rust\nfn a() {}\n```\ntext\n```html\n<html>\n```\n");
        assert_eq!(calls.into_inner(), 2);
    }

    #[test]
    fn test_unterminated_block_passes_through() {
        let text = "```\nfn a() {}\n```\nafter\n```\nnever closed\n";
        let out = tag(text, &fixed("rust")).unwrap();
        assert_eq!(out, "```rust\nfn a() {}\n```\nafter\n```\nnever closed\n");
    }

    #[test]
    fn test_closing_fence_at_end_of_input() {
        let out = tag("```\nfn a() {}\n```", &fixed("rust")).unwrap();
        assert_eq!(out, "```rust\nfn a() {}\n```");
    }

    #[test]
    fn test_classifier_error_propagates() {
        struct Failing;
        impl Classifier for Failing {
            fn classify(&self, _code: &str) -> Result<String, ClassifierError> {
                Err(ClassifierError::Failed("boom".to_string()))
            }
        }
        assert!(tag("```\nx\n```\n", &Failing).is_err());
        // No block to classify, no error
        assert_eq!(tag("plain\n", &Failing).unwrap(), "plain\n");
    }

    #[test]
    fn test_transform_trait() {
        let tagger = LanguageTagger::new(fixed("go"));
        assert_eq!(tagger.name(), "tag");
        assert_eq!(tagger.apply("```\nfunc f() {}\n```\n").unwrap(), "```go\nfunc f() {}\n```\n");
    }
}
