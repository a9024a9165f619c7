use crate::stage::{Stage, StageError};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfkc);

/// Fold compatibility characters with Unicode NFKC.
///
/// For Persian text this mainly turns Arabic presentation forms (contextual
/// glyphs from U+FB50–U+FDFF and U+FE70–U+FEFF, often produced by PDF
/// extraction) back into base letters, e.g. `ﻛﺘﺎﺏ` → `كتاب`. Ligatures such as
/// `ﷲ` expand to their letter sequence. Other compatibility characters
/// (no-break space, fullwidth Latin) are folded too.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixPresentationForms;

impl Stage for FixPresentationForms {
    fn name(&self) -> &'static str {
        "fix_presentation_forms"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> Result<bool, StageError> {
        Ok(!ICU4X_NFKC.is_normalized(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text)? {
            return Ok(text);
        }
        Ok(Cow::Owned(ICU4X_NFKC.normalize(&text).into_owned()))
    }
}
