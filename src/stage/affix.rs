//! Rejoin verbal prefixes and nominal suffixes written as separate tokens.
//!
//! `می خورم` → `می‌خورم`, `کتاب ها` → `کتاب‌ها`. A token that happens to equal
//! an affix but is an independent word is joined as well; the tables are not
//! disambiguated.
//!
//! Every entry becomes its own rule and the rules run in table order over the
//! current text. Within a family the longer form is listed before its
//! prefixes (`هایی`, `های`, `ها`).

use crate::stage::{
    StageError,
    rule::{Rule, RuleStage},
};
use crate::unicode::ZWNJ;

/// Verbal prefixes, always joined when prefix spacing is on.
pub const CORE_PREFIXES: &[&str] = &["نمی", "می"];

/// Extra derivational prefixes joined when `fix_prefix` is on.
pub const EXTENDED_PREFIXES: &[&str] = &["بی", "نا"];

/// Plural and comparative/superlative suffixes.
pub const CORE_SUFFIXES: &[&str] = &["هایی", "های", "ها", "ترین", "تری", "تر"];

/// Possessive clitics, personal endings and derivational suffixes joined
/// when `fix_suffix` is on.
pub const EXTENDED_SUFFIXES: &[&str] = &[
    // possessive clitics on plurals
    "هایمان",
    "هایتان",
    "هایشان",
    "هایم",
    "هایت",
    "هایش",
    // plural possessive clitics on their own
    "مان",
    "تان",
    "شان",
    // personal endings after a participle or a final ه
    "ایم",
    "اید",
    "اند",
    "ام",
    "ات",
    "اش",
    // derivational
    "شناسی",
    "شناس",
    "گرایی",
    "گران",
    "گرا",
    "گری",
    "گذاری",
    "گذار",
    "پردازی",
    "پرداز",
    "نگاری",
    "نگار",
    "پروری",
    "پرور",
    "یابی",
    "یاب",
    "سنجی",
    "سنج",
    "گیری",
    "آمیز",
    "انگیز",
    "آسا",
    "سالار",
    "نشین",
    "واره",
    "وار",
    "مندی",
    "مند",
    "ستان",
    "کده",
    "زاده",
    "گاه",
    "سازی",
    "ناپذیری",
    "ناپذیر",
    "پذیری",
    "پذیر",
];

/// The prefix must stand alone: start of text or whitespace before it,
/// whitespace then a word after it.
fn prefix_rule(stage: &'static str, prefix: &str) -> Result<Rule, StageError> {
    let pattern = format!(r"(^|\s)({})\s+(\S)", regex::escape(prefix));
    Rule::new(stage, &pattern, format!("${{1}}${{2}}{ZWNJ}${{3}}"))
}

/// The suffix must follow a word and be followed by whitespace, a ZWNJ
/// (an already joined clitic), closing punctuation or the end of the text.
fn suffix_rule(stage: &'static str, suffix: &str) -> Result<Rule, StageError> {
    let pattern = format!(
        r"(\S)\s+({})([\s{ZWNJ}.,،؛;:!?؟»)\]}}]|\z)",
        regex::escape(suffix)
    );
    Rule::new(stage, &pattern, format!("${{1}}{ZWNJ}${{2}}${{3}}"))
}

fn build(
    stage: &'static str,
    tables: &[&[&str]],
    rule: fn(&'static str, &str) -> Result<Rule, StageError>,
) -> Result<RuleStage, StageError> {
    let rules = tables
        .iter()
        .flat_map(|table| table.iter())
        .map(|affix| rule(stage, affix))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RuleStage::new(stage, rules))
}

/// Join `می`/`نمی` (and, when `extended`, the derivational prefixes) to the
/// following word with a ZWNJ.
pub fn fix_prefix_spacing(extended: bool) -> Result<RuleStage, StageError> {
    let tables: &[&[&str]] = if extended {
        &[CORE_PREFIXES, EXTENDED_PREFIXES]
    } else {
        &[CORE_PREFIXES]
    };
    build("fix_prefix_spacing", tables, prefix_rule)
}

/// Join the suffix table to the preceding word with a ZWNJ.
///
/// The extended table goes first so that `هایشان` is joined whole before the
/// core `های` could ever see it.
pub fn fix_suffix_spacing(extended: bool) -> Result<RuleStage, StageError> {
    let tables: &[&[&str]] = if extended {
        &[EXTENDED_SUFFIXES, CORE_SUFFIXES]
    } else {
        &[CORE_SUFFIXES]
    };
    build("fix_suffix_spacing", tables, suffix_rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;
    use std::borrow::Cow;

    fn run(stage: &RuleStage, input: &str) -> String {
        stage.apply(Cow::Borrowed(input)).unwrap().into_owned()
    }

    #[test]
    fn mi_joins_following_verb() {
        let stage = fix_prefix_spacing(false).unwrap();
        assert_eq!(run(&stage, "من می خورم"), "من می\u{200C}خورم");
        assert_eq!(run(&stage, "می روم"), "می\u{200C}روم");
        assert_eq!(run(&stage, "تو نمی دانی"), "تو نمی\u{200C}دانی");
    }

    #[test]
    fn prefix_inside_a_word_is_ignored() {
        let stage = fix_prefix_spacing(false).unwrap();
        assert!(!stage.needs_apply("سیمین رفت").unwrap());
        // Trailing prefix has no word to join.
        assert_eq!(run(&stage, "گفت می"), "گفت می");
    }

    #[test]
    fn extended_prefixes_need_the_flag() {
        assert_eq!(run(&fix_prefix_spacing(false).unwrap(), "بی کار"), "بی کار");
        assert_eq!(
            run(&fix_prefix_spacing(true).unwrap(), "بی کار"),
            "بی\u{200C}کار"
        );
    }

    #[test]
    fn longer_plural_suffix_wins() {
        let stage = fix_suffix_spacing(false).unwrap();
        assert_eq!(run(&stage, "کتاب ها"), "کتاب\u{200C}ها");
        assert_eq!(run(&stage, "کتاب های من"), "کتاب\u{200C}های من");
        assert_eq!(run(&stage, "کتاب هایی خریدم"), "کتاب\u{200C}هایی خریدم");
    }

    #[test]
    fn comparative_suffixes() {
        let stage = fix_suffix_spacing(false).unwrap();
        assert_eq!(run(&stage, "بزرگ تر"), "بزرگ\u{200C}تر");
        assert_eq!(run(&stage, "بزرگ ترین شهر"), "بزرگ\u{200C}ترین شهر");
    }

    #[test]
    fn suffix_before_punctuation() {
        let stage = fix_suffix_spacing(false).unwrap();
        assert_eq!(run(&stage, "کتاب ها."), "کتاب\u{200C}ها.");
    }

    #[test]
    fn suffix_at_line_start_is_not_joined_across_newline() {
        let stage = fix_suffix_spacing(false).unwrap();
        assert_eq!(run(&stage, "\nها"), "\nها");
    }

    #[test]
    fn possessive_plural_needs_extended_table() {
        assert_eq!(
            run(&fix_suffix_spacing(false).unwrap(), "کتاب هایشان"),
            "کتاب هایشان"
        );
        assert_eq!(
            run(&fix_suffix_spacing(true).unwrap(), "کتاب هایشان"),
            "کتاب\u{200C}هایشان"
        );
    }

    #[test]
    fn standalone_clitic_joins_bare_noun() {
        let stage = fix_suffix_spacing(true).unwrap();
        assert_eq!(run(&stage, "کتاب شان"), "کتاب\u{200C}شان");
        assert_eq!(run(&stage, "خانه تان کجاست"), "خانه\u{200C}تان کجاست");
    }

    #[test]
    fn plural_then_clitic_joins_both() {
        let stage = fix_suffix_spacing(true).unwrap();
        // `شان` joins first, then `های` sees the ZWNJ as its right boundary.
        assert_eq!(run(&stage, "کتاب های شان"), "کتاب\u{200C}های\u{200C}شان");
        assert_eq!(run(&stage, "کتاب های مان."), "کتاب\u{200C}های\u{200C}مان.");
    }

    #[test]
    fn derivational_suffixes_join() {
        let stage = fix_suffix_spacing(true).unwrap();
        assert_eq!(run(&stage, "زبان شناسی"), "زبان\u{200C}شناسی");
        assert_eq!(run(&stage, "زبان شناس"), "زبان\u{200C}شناس");
        assert_eq!(run(&stage, "سرمایه گذاری"), "سرمایه\u{200C}گذاری");
        assert_eq!(run(&stage, "اجتناب ناپذیر"), "اجتناب\u{200C}ناپذیر");
        assert_eq!(run(&stage, "مدرسه نشین"), "مدرسه\u{200C}نشین");
    }

    #[test]
    fn tables_list_longer_forms_first() {
        for table in [CORE_SUFFIXES, EXTENDED_SUFFIXES, CORE_PREFIXES] {
            for (i, short) in table.iter().enumerate() {
                for long in &table[i + 1..] {
                    assert!(
                        !(long.starts_with(short) && long.len() > short.len()),
                        "`{long}` must precede `{short}`"
                    );
                }
            }
        }
    }

    #[test]
    fn affix_stages_satisfy_contract() {
        use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

        assert_stage_contract!(
            fix_prefix_spacing(true).unwrap(),
            StageTestConfig {
                samples: &["می روم", "من نمی دانم", "بی کار"],
                should_pass_through: &["می\u{200C}روم", "سلام", ""],
                should_transform: &[("می روم", "می\u{200C}روم")],
            }
        );
        assert_stage_contract!(
            fix_suffix_spacing(true).unwrap(),
            StageTestConfig {
                samples: &["کتاب ها", "بزرگ ترین شهر"],
                should_pass_through: &["کتاب\u{200C}ها", "سلام", ""],
                should_transform: &[("کتاب ها", "کتاب\u{200C}ها")],
            }
        );
    }
}
