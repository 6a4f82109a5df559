//!
//! Text transformations built on the fence scanner, plus the code-font
//! paragraph wrapper used before export.

pub mod backslash_stripper;
pub mod code_wrapper;
pub mod language_tagger;

pub use backslash_stripper::{BackslashStripper, strip};
pub use code_wrapper::{CODE_STYLE_FONT_NAME, Paragraph, replace_leading_spaces, wrap_code_paragraphs};
pub use language_tagger::{LanguageTagger, tag};

use crate::classifier::ClassifierError;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Language classification failed: {0}")]
    Classifier(#[from] ClassifierError),
}

/// A whole-document rewrite applied to each file.
pub trait Transform {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn apply(&self, content: &str) -> Result<String, TransformError>;
}

/// The transformations selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Tag,
    Strip,
}

impl TransformKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Strip => "strip",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
