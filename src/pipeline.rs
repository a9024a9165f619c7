// src/pipeline.rs
use crate::{
    config::NormalizerConfig,
    stage::{
        Stage, StageError, affix,
        letters::{self, FixEnglishNumbers},
        presentation_forms::FixPresentationForms,
        punctuation,
        quotes::FixEnglishQuotes,
        spacing::{self, TrimEdges},
    },
};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

pub type DynStage = Arc<dyn Stage + Send + Sync>;

/// One row of the built-in stage table.
pub struct StageEntry {
    pub name: &'static str,
    pub enabled: fn(&NormalizerConfig) -> bool,
    pub build: fn(&NormalizerConfig) -> Result<DynStage, StageError>,
}

impl StageEntry {
    #[inline]
    pub fn is_enabled(&self, config: &NormalizerConfig) -> bool {
        (self.enabled)(config)
    }
}

macro_rules! stage {
    ($name:literal, |$c:ident| $enabled:expr, $build:expr) => {
        StageEntry {
            name: $name,
            enabled: |$c: &NormalizerConfig| $enabled,
            build: $build,
        }
    };
}

/// Built-in stages in execution order.
///
/// URL protection and restoration wrap the whole table and are not listed.
pub static STAGES: &[StageEntry] = &[
    stage!("fix_presentation_forms", |c| c.fix_presentation_forms, |_| {
        Ok(Arc::new(FixPresentationForms))
    }),
    stage!("fix_dashes", |c| c.fix_dashes, |_| {
        Ok(Arc::new(punctuation::fix_dashes()?))
    }),
    stage!("fix_three_dots", |c| c.fix_three_dots, |_| {
        Ok(Arc::new(punctuation::fix_three_dots()?))
    }),
    stage!("fix_english_quotes", |c| c.fix_english_quotes, |_| {
        Ok(Arc::new(FixEnglishQuotes))
    }),
    stage!("fix_hamzeh", |c| c.fix_hamzeh, |_| {
        Ok(Arc::new(letters::fix_hamzeh()?))
    }),
    stage!("cleanup_zwnj", |c| c.cleanup_zwnj, |_| {
        Ok(Arc::new(spacing::cleanup_zwnj()?))
    }),
    stage!("fix_english_numbers", |c| c.fix_english_numbers, |_| {
        Ok(Arc::new(FixEnglishNumbers::new()?))
    }),
    stage!("fix_arabic_numbers", |c| c.fix_arabic_numbers, |_| {
        Ok(Arc::new(letters::fix_arabic_numbers()))
    }),
    stage!("fix_misc_non_persian_chars", |c| c.fix_misc_non_persian_chars, |_| {
        Ok(Arc::new(letters::fix_misc_non_persian_chars()))
    }),
    stage!("fix_prefix_spacing", |c| c.fix_prefix_spacing, |c| {
        Ok(Arc::new(affix::fix_prefix_spacing(c.fix_prefix)?))
    }),
    stage!("fix_suffix_spacing", |c| c.fix_suffix_spacing, |c| {
        Ok(Arc::new(affix::fix_suffix_spacing(c.fix_suffix)?))
    }),
    stage!("cleanup_extra_marks", |c| c.aggressive && c.cleanup_extra_marks, |_| {
        Ok(Arc::new(punctuation::cleanup_extra_marks()?))
    }),
    stage!("cleanup_kashidas", |c| c.aggressive && c.cleanup_kashidas, |_| {
        Ok(Arc::new(letters::cleanup_kashidas()?))
    }),
    stage!(
        "fix_spacing_for_braces_and_quotes",
        |c| c.fix_spacing_for_braces_and_quotes,
        |_| Ok(Arc::new(spacing::fix_spacing_for_braces_and_quotes()?))
    ),
    stage!("cleanup_spacing", |c| c.cleanup_spacing, |_| {
        Ok(Arc::new(spacing::cleanup_spacing()?))
    }),
    stage!("cleanup_begin_and_end", |c| c.cleanup_begin_and_end, |_| {
        Ok(Arc::new(TrimEdges))
    }),
];

#[derive(Default, Clone)]
pub struct Pipeline {
    stages: SmallVec<[DynStage; 16]>,
}

impl Pipeline {
    /// Instantiate every stage of [`STAGES`] the configuration enables.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self, StageError> {
        let mut pipeline = Self::default();
        for entry in STAGES.iter().filter(|entry| entry.is_enabled(config)) {
            pipeline.stages.push((entry.build)(config)?);
        }
        Ok(pipeline)
    }

    pub fn push(&mut self, stage: DynStage) {
        self.stages.push(stage);
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    pub fn process<'a>(&self, mut text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&text)? {
                continue;
            }
            text = stage.apply(text)?;
            log::debug!("stage `{}` rewrote text ({} bytes)", stage.name(), text.len());
        }
        Ok(text)
    }
}
