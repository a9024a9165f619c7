use crate::{config::NormalizerConfig, profile::Profile};

/// Every preset, for lookup by name.
pub static ALL: &[fn() -> Profile] = &[standard, conservative, characters_only, spacing_only];

/// The full default pipeline.
pub fn standard() -> Profile {
    Profile::new("standard", NormalizerConfig::default())
}

/// Everything except the rewrites that can misfire on running text: no
/// affix joining (an independent word identical to an affix would be
/// glued) and no quote rewriting (apostrophes in Latin text would pair up).
pub fn conservative() -> Profile {
    Profile::new(
        "conservative",
        NormalizerConfig {
            fix_english_quotes: false,
            fix_prefix_spacing: false,
            fix_suffix_spacing: false,
            fix_prefix: false,
            fix_suffix: false,
            ..NormalizerConfig::default()
        },
    )
}

/// Character-level canonicalization only; spacing and token boundaries are
/// left exactly as they are.
pub fn characters_only() -> Profile {
    Profile::new(
        "characters_only",
        NormalizerConfig {
            fix_english_numbers: true,
            fix_arabic_numbers: true,
            fix_misc_non_persian_chars: true,
            aggressive: true,
            cleanup_kashidas: true,
            ..NormalizerConfig::disabled()
        },
    )
}

/// Whitespace, ZWNJ and punctuation spacing only.
pub fn spacing_only() -> Profile {
    Profile::new(
        "spacing_only",
        NormalizerConfig {
            cleanup_zwnj: true,
            fix_spacing_for_braces_and_quotes: true,
            cleanup_spacing: true,
            cleanup_begin_and_end: true,
            ..NormalizerConfig::disabled()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_by_name() {
        for preset in ALL {
            let profile = preset();
            assert_eq!(Profile::by_name(profile.name()), Some(profile));
        }
        assert_eq!(Profile::by_name("nope"), None);
    }

    #[test]
    fn characters_only_keeps_spacing() {
        let normalizer = characters_only().build().unwrap();
        assert_eq!(
            normalizer.cleanup("  كتاب  12 رحــيم ").unwrap(),
            "  کتاب  ۱۲ رحیم "
        );
    }

    #[test]
    fn conservative_leaves_affixes_apart() {
        let normalizer = conservative().build().unwrap();
        assert_eq!(normalizer.cleanup("کتاب ها را می خوانم").unwrap(), "کتاب ها را می خوانم");
    }

    #[test]
    fn spacing_only_keeps_characters() {
        let normalizer = spacing_only().build().unwrap();
        assert_eq!(normalizer.cleanup("  علي  ,  12 ").unwrap(), "علي, 12");
    }
}
