//! Letter and digit canonicalization.
//!
//! Digits and Arabic look-alike letters are plain one-to-one table lookups
//! ([`TranslateChars`]); hamzeh and kashida are regex rules.

use crate::{
    stage::{
        Stage, StageError,
        rule::{Rule, RuleStage},
    },
    unicode::persian_digit_to_ascii,
};
use phf::{Map, phf_map};
use std::borrow::Cow;

pub static ENGLISH_TO_PERSIAN_DIGITS: Map<char, char> = phf_map! {
    '0' => '۰', '1' => '۱', '2' => '۲', '3' => '۳', '4' => '۴',
    '5' => '۵', '6' => '۶', '7' => '۷', '8' => '۸', '9' => '۹',
};

pub static ARABIC_TO_PERSIAN_DIGITS: Map<char, char> = phf_map! {
    '٠' => '۰', '١' => '۱', '٢' => '۲', '٣' => '۳', '٤' => '۴',
    '٥' => '۵', '٦' => '۶', '٧' => '۷', '٨' => '۸', '٩' => '۹',
};

/// Arabic letters and ASCII punctuation with a distinct Persian form.
pub static MISC_NON_PERSIAN_CHARS: Map<char, char> = phf_map! {
    ',' => '،',
    ';' => '؛',
    '%' => '٪',
    'ك' => 'ک',
    'ي' => 'ی',
    'ى' => 'ی',
};

/// `ه ی` written apart (or with a ZWNJ) after a word becomes `هٔ`.
pub const HAMZEH_RULES: &[(&str, &str)] = &[("(\\S)ه[\\s\u{200C}]+[یي](\\s)", "${1}هٔ${2}")];

pub const KASHIDA_RULES: &[(&str, &str)] = &[("\u{0640}+", "")];

/// Digit runs glued to a Latin word or identifier (`mp3`, `covid19`, `x_86`).
const LATIN_DIGIT_RUN: &str = "[a-zA-Z\\-_]{2,}[۰-۹]+|[۰-۹]+[a-zA-Z\\-_]{2,}";

/// One-to-one character substitution from a static table.
#[derive(Debug, Clone, Copy)]
pub struct TranslateChars {
    name: &'static str,
    table: &'static Map<char, char>,
}

impl TranslateChars {
    pub const fn new(name: &'static str, table: &'static Map<char, char>) -> Self {
        Self { name, table }
    }

    #[inline(always)]
    fn map(&self, c: char) -> char {
        self.table.get(&c).copied().unwrap_or(c)
    }
}

impl Stage for TranslateChars {
    fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(text.chars().any(|c| self.table.contains_key(&c)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text)? {
            return Ok(text);
        }
        Ok(Cow::Owned(text.chars().map(|c| self.map(c)).collect()))
    }
}

/// ASCII digits → Persian digits, except inside Latin tokens.
///
/// After the table pass, every digit run that touches two or more Latin
/// letters (in either order) is turned back into ASCII, so identifiers such
/// as `mp3` or `H2SO4`-like codes with letter pairs survive.
#[derive(Debug, Clone)]
pub struct FixEnglishNumbers {
    digits: TranslateChars,
    latin_run: Rule,
}

impl FixEnglishNumbers {
    pub const NAME: &'static str = "fix_english_numbers";

    pub fn new() -> Result<Self, StageError> {
        Ok(Self {
            digits: TranslateChars::new(Self::NAME, &ENGLISH_TO_PERSIAN_DIGITS),
            latin_run: Rule::new(Self::NAME, LATIN_DIGIT_RUN, "")?,
        })
    }
}

impl Stage for FixEnglishNumbers {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(self.digits.needs_apply(text)? || self.latin_run.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let text = self.digits.apply(text)?;
        if !self.latin_run.is_match(&text) {
            return Ok(text);
        }
        let reverted = self
            .latin_run
            .regex()
            .replace_all(&text, |caps: &regex::Captures<'_>| {
                caps[0].chars().map(persian_digit_to_ascii).collect::<String>()
            })
            .into_owned();
        Ok(Cow::Owned(reverted))
    }
}

pub fn fix_arabic_numbers() -> TranslateChars {
    TranslateChars::new("fix_arabic_numbers", &ARABIC_TO_PERSIAN_DIGITS)
}

pub fn fix_misc_non_persian_chars() -> TranslateChars {
    TranslateChars::new("fix_misc_non_persian_chars", &MISC_NON_PERSIAN_CHARS)
}

pub fn fix_hamzeh() -> Result<RuleStage, StageError> {
    RuleStage::from_table("fix_hamzeh", HAMZEH_RULES)
}

/// Deletes every tatweel, whatever the run length.
///
/// ```text
/// "رحــــــيم" → "رحيم"
/// ```
pub fn cleanup_kashidas() -> Result<RuleStage, StageError> {
    RuleStage::from_table("cleanup_kashidas", KASHIDA_RULES)
}
