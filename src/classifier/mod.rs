//! Language classification for untagged code blocks.
//!
//! The tagger treats a classifier as an oracle: given the raw text of a
//! block it returns a language label, possibly empty. Any
//! `Fn(&str) -> String` qualifies, which keeps tests and ad-hoc callers
//! simple; [`HeuristicClassifier`] is the built-in implementation.

pub mod heuristics;
pub mod linguist;

pub use heuristics::HeuristicClassifier;
pub use linguist::LanguageResolver;

use crate::config::{NormalizeLanguage, TagConfig};

/// Failure to produce a label for a block.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    #[error("classification failed: {0}")]
    Failed(String),
}

/// Maps the raw text of a code block to a language label.
pub trait Classifier {
    fn classify(&self, code: &str) -> Result<String, ClassifierError>;
}

impl<F> Classifier for F
where
    F: Fn(&str) -> String,
{
    fn classify(&self, code: &str) -> Result<String, ClassifierError> {
        Ok(self(code))
    }
}

/// Applies the `[tag]` settings on top of another classifier.
pub struct ConfiguredClassifier<C> {
    inner: C,
    fallback: String,
    resolver: Option<LanguageResolver>,
}

impl<C: Classifier> ConfiguredClassifier<C> {
    pub fn new(inner: C, config: &TagConfig) -> Self {
        let resolver = match config.normalize_language {
            NormalizeLanguage::Linguist => Some(LanguageResolver::new(config.language_aliases.clone())),
            NormalizeLanguage::Exact => None,
        };
        Self {
            inner,
            fallback: config.fallback_language.clone(),
            resolver,
        }
    }
}

impl<C: Classifier> Classifier for ConfiguredClassifier<C> {
    fn classify(&self, code: &str) -> Result<String, ClassifierError> {
        let label = self.inner.classify(code)?;
        let label = if label.trim().is_empty() {
            self.fallback.clone()
        } else {
            label
        };
        Ok(match &self.resolver {
            Some(resolver) if !label.is_empty() => resolver.resolve(&label),
            _ => label,
        })
    }
}
