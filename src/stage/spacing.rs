//! Whitespace, ZWNJ and punctuation spacing.

use crate::stage::{
    Stage, StageError,
    rule::{Rule, RuleStage},
};
use std::borrow::Cow;

/// A ZWNJ next to spaces or tabs carries no meaning. Line breaks are left to
/// [`cleanup_spacing`].
pub const ZWNJ_RULES: &[(&str, &str)] = &[("[^\\S\n]+\u{200C}|\u{200C}[^\\S\n]+", " ")];

/// One space outside each delimiter pair, none inside.
pub const OUTER_PAIR_RULES: &[(&str, &str)] = &[
    ("[ \t\u{200C}]*(\\()\\s*([^)]+?)\\s*?(\\))[ \t\u{200C}]*", " ${1}${2}${3} "),
    ("[ \t\u{200C}]*(\\[)\\s*([^\\]]+?)\\s*?(\\])[ \t\u{200C}]*", " ${1}${2}${3} "),
    ("[ \t\u{200C}]*(\\{)\\s*([^}]+?)\\s*?(\\})[ \t\u{200C}]*", " ${1}${2}${3} "),
    ("[ \t\u{200C}]*(“)\\s*([^”]+?)\\s*?(”)[ \t\u{200C}]*", " ${1}${2}${3} "),
    ("[ \t\u{200C}]*(«)\\s*([^»]+?)\\s*?(»)[ \t\u{200C}]*", " ${1}${2}${3} "),
];

/// `: ; , . ۔ ؛ ، ؟ !` get one space after and none before.
pub const PUNCTUATION_SPACING_RULES: &[(&str, &str)] =
    &[("[ \t\u{200C}]*([:;,؛،.۔؟!])[ \t\u{200C}]*", "${1} ")];

/// The colon inside a Persian time (`۱۲:۳۰:۴۵`) stays tight.
pub const TIME_COLON_RULE: (&str, &str) = ("([۰-۹]+):\\s+([۰-۹]+)", "${1}:${2}");

/// The punctuation pass may have put a space before a closing delimiter.
pub const INNER_PAIR_RULES: &[(&str, &str)] = &[
    ("(\\()\\s*([^)]+?)\\s*?(\\))", "${1}${2}${3}"),
    ("(\\[)\\s*([^\\]]+?)\\s*?(\\])", "${1}${2}${3}"),
    ("(\\{)\\s*([^}]+?)\\s*?(\\})", "${1}${2}${3}"),
    ("(“)\\s*([^”]+?)\\s*?(”)", "${1}${2}${3}"),
    ("(«)\\s*([^»]+?)\\s*?(»)", "${1}${2}${3}"),
];

/// Space runs collapse; spaces, tabs and ZWNJs hugging a line break go.
pub const SPACING_RULES: &[(&str, &str)] = &[
    (" {2,}", " "),
    ("[ \t\u{200C}]+\n", "\n"),
    ("\n[ \t\u{200C}]+", "\n"),
];

pub fn cleanup_zwnj() -> Result<RuleStage, StageError> {
    RuleStage::from_table("cleanup_zwnj", ZWNJ_RULES)
}

pub fn fix_spacing_for_braces_and_quotes() -> Result<RuleStage, StageError> {
    const NAME: &str = "fix_spacing_for_braces_and_quotes";
    let (time_pattern, time_replacement) = TIME_COLON_RULE;

    let mut rules = Rule::table(NAME, OUTER_PAIR_RULES)?;
    rules.extend(Rule::table(NAME, PUNCTUATION_SPACING_RULES)?);
    // Chained times share their digit runs, so one pass leaves every other colon.
    rules.push(Rule::new(NAME, time_pattern, time_replacement)?.until_stable());
    rules.extend(Rule::table(NAME, INNER_PAIR_RULES)?);
    Ok(RuleStage::new(NAME, rules))
}

pub fn cleanup_spacing() -> Result<RuleStage, StageError> {
    RuleStage::from_table("cleanup_spacing", SPACING_RULES)
}

/// Strip leading and trailing whitespace (spaces, tabs, line breaks) from
/// the whole text.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrimEdges;

impl Stage for TrimEdges {
    fn name(&self) -> &'static str {
        "cleanup_begin_and_end"
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        // Fast path for ASCII
        let b = text.as_bytes();
        if b.first().is_some_and(u8::is_ascii_whitespace)
            || b.last().is_some_and(u8::is_ascii_whitespace)
        {
            return Ok(true);
        }

        // Fallback for Unicode whitespace
        Ok(text.chars().next().is_some_and(char::is_whitespace)
            || text.chars().next_back().is_some_and(char::is_whitespace))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let trimmed = text.trim();
        if trimmed.len() == text.len() {
            return Ok(text);
        }
        Ok(match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => Cow::Owned(s.trim().to_owned()),
        })
    }
}
