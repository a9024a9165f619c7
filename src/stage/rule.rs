use crate::stage::{Stage, StageError};
use regex::Regex;
use std::borrow::Cow;

/// One `(pattern, replacement)` rewrite.
///
/// The replacement is a `regex` template: `${1}` refers to the first capture
/// group. Matches are found left-to-right and never overlap; a rule marked
/// [`until_stable`](Rule::until_stable) is re-run until it stops matching.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: Cow<'static, str>,
    until_stable: bool,
}

impl Rule {
    pub fn new(
        stage: &'static str,
        pattern: &str,
        replacement: impl Into<Cow<'static, str>>,
    ) -> Result<Self, StageError> {
        let pattern =
            Regex::new(pattern).map_err(|source| StageError::Pattern { stage, source })?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
            until_stable: false,
        })
    }

    /// Compile a static `(pattern, replacement)` table, in order.
    pub fn table(
        stage: &'static str,
        table: &[(&str, &'static str)],
    ) -> Result<Vec<Self>, StageError> {
        table
            .iter()
            .map(|&(pattern, replacement)| Self::new(stage, pattern, replacement))
            .collect()
    }

    /// Repeat the rewrite until the text stops changing, for matches that
    /// would otherwise have to overlap (`۱:۲:۳`). Every rewrite must shorten
    /// the text.
    pub fn until_stable(mut self) -> Self {
        self.until_stable = true;
        self
    }

    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.pattern
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Rewrite every match; hands `text` back untouched when nothing matches.
    pub fn apply<'a>(&self, mut text: Cow<'a, str>) -> Cow<'a, str> {
        loop {
            let rewritten = match self.pattern.replace_all(&text, self.replacement.as_ref()) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            match rewritten {
                Some(s) => text = Cow::Owned(s),
                None => return text,
            }
            if !self.until_stable {
                return text;
            }
        }
    }
}

/// An ordered group of rules applied as one named stage.
///
/// A later rule sees the output of every earlier one, so table order is part
/// of the stage's behaviour.
#[derive(Debug, Clone)]
pub struct RuleStage {
    name: &'static str,
    rules: Vec<Rule>,
}

impl RuleStage {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    /// Compile a static `(pattern, replacement)` table.
    pub fn from_table(
        name: &'static str,
        table: &[(&str, &'static str)],
    ) -> Result<Self, StageError> {
        Ok(Self::new(name, Rule::table(name, table)?))
    }
}

impl Stage for RuleStage {
    fn name(&self) -> &'static str {
        self.name
    }

    // If no rule matches the input, no rule can match any intermediate state
    // either, since every intermediate state is the input itself.
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(self.rules.iter().any(|rule| rule.is_match(text)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        Ok(self.rules.iter().fold(text, |text, rule| rule.apply(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_keeps_borrow_when_nothing_matches() {
        let rule = Rule::new("test", "-{2}", "–").unwrap();
        let input = "no dashes here";
        let out = rule.apply(Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn rule_expands_capture_groups() {
        let rule = Rule::new("test", r"(\w+)@(\w+)", "${2} at ${1}").unwrap();
        assert_eq!(rule.apply(Cow::Borrowed("me@home")), "home at me");
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let stage = RuleStage::from_table("chain", &[("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(stage.apply(Cow::Borrowed("ab")).unwrap(), "cc");
    }

    #[test]
    fn until_stable_rewrites_chained_matches() {
        let once = Rule::new("test", r"(\d):\s+(\d)", "${1}:${2}").unwrap();
        assert_eq!(once.apply(Cow::Borrowed("1: 2: 3")), "1:2: 3");

        let stable = once.until_stable();
        assert_eq!(stable.apply(Cow::Borrowed("1: 2: 3")), "1:2:3");
        assert_eq!(stable.apply(Cow::Borrowed("12: 30: 45: 00")), "12:30:45:00");
        let input = "1:2";
        assert!(matches!(stable.apply(Cow::Borrowed(input)), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn invalid_pattern_names_the_stage() {
        let err = RuleStage::from_table("broken", &[("(unclosed", "")]).unwrap_err();
        assert!(matches!(err, StageError::Pattern { stage: "broken", .. }));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn needs_apply_false_without_matches() {
        let stage = RuleStage::from_table("chain", &[("a", "b"), ("b", "c")]).unwrap();
        assert!(!stage.needs_apply("xyz").unwrap());
        assert!(stage.needs_apply("xbz").unwrap());
    }
}
