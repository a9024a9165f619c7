//! Run-length punctuation rewrites: dashes, ellipses and repeated marks.

use crate::stage::{StageError, rule::RuleStage};

/// Triple dash must go first, otherwise `---` would become `–-`.
pub const DASH_RULES: &[(&str, &str)] = &[("-{3}", "—"), ("-{2}", "–")];

/// Whitespace in front of the dots is absorbed: `3, ...` → `3,…`.
pub const THREE_DOTS_RULES: &[(&str, &str)] = &[(r"\s*\.{3,}", "…")];

pub const EXTRA_MARKS_RULES: &[(&str, &str)] = &[("!{2,}", "!"), ("؟{2,}", "؟")];

/// `--` → en-dash, `---` → em-dash.
///
/// ```text
/// "صفحه 2--4" → "صفحه 2–4"
/// ```
pub fn fix_dashes() -> Result<RuleStage, StageError> {
    RuleStage::from_table("fix_dashes", DASH_RULES)
}

/// Three or more dots → `…`.
pub fn fix_three_dots() -> Result<RuleStage, StageError> {
    RuleStage::from_table("fix_three_dots", THREE_DOTS_RULES)
}

/// `!!!` → `!` and `؟؟؟` → `؟`.
pub fn cleanup_extra_marks() -> Result<RuleStage, StageError> {
    RuleStage::from_table("cleanup_extra_marks", EXTRA_MARKS_RULES)
}
