pub mod classifier;
pub mod config;
pub mod exit_codes;
pub mod fence;
pub mod init;
pub mod transforms;

pub use classifier::{Classifier, ClassifierError, HeuristicClassifier};
pub use config::Config;
pub use transforms::{Transform, TransformError, TransformKind, strip, tag, wrap_code_paragraphs};

/// Tag untagged fences using the built-in heuristic classifier.
pub fn tag_with_heuristics(content: &str) -> Result<String, ClassifierError> {
    tag(content, &HeuristicClassifier::new())
}
