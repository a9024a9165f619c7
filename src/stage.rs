//! Core normalization stage abstraction.
//!
//! A stage is one independently toggleable step of the Persian cleanup
//! pipeline. Most stages are an ordered group of regular-expression [`Rule`]s
//! (see [`rule::RuleStage`]); the rest are character-table lookups or small
//! hand-written scanners where a regex cannot express the rewrite.
//!
//! Every stage follows the same allocation contract:
//!
//! * `needs_apply(text) == false` means `apply` would leave `text` untouched,
//!   so the pipeline skips the stage and the input stays borrowed.
//! * `apply` takes ownership of a `Cow<str>` and returns it unchanged
//!   (still borrowed) whenever nothing was rewritten.
//!
//! [`Rule`]: rule::Rule

pub mod affix;
pub mod letters;
pub mod presentation_forms;
pub mod punctuation;
pub mod quotes;
pub mod rule;
pub mod spacing;

use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("stage `{stage}` has an invalid rule pattern: {source}")]
    Pattern {
        stage: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without a preceding `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError>;
}
