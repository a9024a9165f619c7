use thiserror::Error;

use crate::{
    config::NormalizerConfig,
    pipeline::Pipeline,
    profile::Profile,
    protect::{ProtectedSpans, URL_PATTERN},
    stage::{Stage, StageError},
};
use regex::Regex;
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("invalid url pattern: {0}")]
    UrlPattern(#[from] regex::Error),
}

/// Rewrites raw Persian text into canonical orthography.
///
/// Built once, then shared freely: the stage list and every compiled pattern
/// are immutable, and `cleanup` keeps all of its bookkeeping on the stack.
///
/// ```text
/// let normalizer = Normalizer::new()?;
/// normalizer.cleanup("اين كتاب ها  را مي خوانم!!!")?;
/// // → "این کتاب‌ها را می‌خوانم!"
/// ```
#[derive(Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    pipeline: Pipeline,
    urls: Regex,
}

impl Normalizer {
    /// A normalizer with the default configuration.
    pub fn new() -> Result<Self, NormalizerError> {
        Self::builder().build()
    }

    pub fn with_config(config: NormalizerConfig) -> Result<Self, NormalizerError> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Names of the stages that run, in order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pipeline.stage_names()
    }

    /// Normalize `text`.
    ///
    /// URLs are shielded from every stage and come back byte for byte. The
    /// result borrows the input when no stage changed anything. Built-in
    /// stages never fail; an error can only come from a stage added with
    /// [`NormalizerBuilder::add_stage`].
    pub fn cleanup<'a>(&self, text: impl Into<Cow<'a, str>>) -> Result<Cow<'a, str>, NormalizerError> {
        let (text, protected) = ProtectedSpans::protect(&self.urls, text.into());
        let text = self.pipeline.process(text)?;
        Ok(protected.restore(text))
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .field("stages", &self.stage_names().collect::<Vec<_>>())
            .finish()
    }
}

macro_rules! flag_setters {
    ($($flag:ident),* $(,)?) => {
        $(
            pub fn $flag(mut self, on: bool) -> Self {
                self.config.$flag = on;
                self
            }
        )*
    };
}

#[derive(Default)]
pub struct NormalizerBuilder {
    config: NormalizerConfig,
    extra: Vec<Arc<dyn Stage + Send + Sync>>,
}

impl NormalizerBuilder {
    pub fn config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn profile(self, profile: Profile) -> Self {
        self.config(profile.config())
    }

    flag_setters!(
        fix_presentation_forms,
        fix_dashes,
        fix_three_dots,
        fix_english_quotes,
        fix_hamzeh,
        cleanup_zwnj,
        fix_english_numbers,
        fix_arabic_numbers,
        fix_misc_non_persian_chars,
        fix_prefix_spacing,
        fix_suffix_spacing,
        fix_prefix,
        fix_suffix,
        aggressive,
        cleanup_extra_marks,
        cleanup_kashidas,
        fix_spacing_for_braces_and_quotes,
        cleanup_spacing,
        cleanup_begin_and_end,
    );

    /// Append a custom stage; it runs after the built-in ones, still inside
    /// URL protection.
    pub fn add_stage<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.extra.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Result<Normalizer, NormalizerError> {
        let mut pipeline = Pipeline::from_config(&self.config)?;
        for stage in self.extra {
            pipeline.push(stage);
        }
        log::debug!(
            "normalizer built with {} stage(s): {}",
            pipeline.len(),
            pipeline.stage_names().collect::<Vec<_>>().join(", ")
        );
        Ok(Normalizer {
            config: self.config,
            pipeline,
            urls: Regex::new(URL_PATTERN)?,
        })
    }
}
