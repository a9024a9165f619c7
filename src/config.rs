use serde::{Deserialize, Serialize};

/// Which cleanup stages a [`Normalizer`](crate::Normalizer) runs.
///
/// Every flag defaults to `true` except `fix_presentation_forms`. The
/// configuration is fixed once the normalizer is built; build another one to
/// change it.
///
/// Deserialization fills missing fields from the default, so a JSON document
/// only needs the flags it changes:
///
/// ```text
/// { "fix_suffix": false, "aggressive": false }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// NFKC, mainly for Arabic presentation forms.
    pub fix_presentation_forms: bool,
    pub fix_dashes: bool,
    pub fix_three_dots: bool,
    pub fix_english_quotes: bool,
    pub fix_hamzeh: bool,
    pub cleanup_zwnj: bool,
    pub fix_english_numbers: bool,
    pub fix_arabic_numbers: bool,
    pub fix_misc_non_persian_chars: bool,
    pub fix_prefix_spacing: bool,
    pub fix_suffix_spacing: bool,
    /// Widen the prefix table beyond `می`/`نمی`.
    pub fix_prefix: bool,
    /// Widen the suffix table beyond plural and comparative suffixes.
    pub fix_suffix: bool,
    /// Gate over `cleanup_extra_marks` and `cleanup_kashidas`.
    pub aggressive: bool,
    pub cleanup_extra_marks: bool,
    pub cleanup_kashidas: bool,
    pub fix_spacing_for_braces_and_quotes: bool,
    pub cleanup_spacing: bool,
    pub cleanup_begin_and_end: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fix_presentation_forms: false,
            ..Self::all(true)
        }
    }
}

impl NormalizerConfig {
    const fn all(on: bool) -> Self {
        Self {
            fix_presentation_forms: on,
            fix_dashes: on,
            fix_three_dots: on,
            fix_english_quotes: on,
            fix_hamzeh: on,
            cleanup_zwnj: on,
            fix_english_numbers: on,
            fix_arabic_numbers: on,
            fix_misc_non_persian_chars: on,
            fix_prefix_spacing: on,
            fix_suffix_spacing: on,
            fix_prefix: on,
            fix_suffix: on,
            aggressive: on,
            cleanup_extra_marks: on,
            cleanup_kashidas: on,
            fix_spacing_for_braces_and_quotes: on,
            cleanup_spacing: on,
            cleanup_begin_and_end: on,
        }
    }

    /// Every stage off; URLs still round-trip untouched.
    pub const fn disabled() -> Self {
        Self::all(false)
    }

    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
