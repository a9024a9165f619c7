pub mod preset;

use crate::{
    config::NormalizerConfig,
    normalizer::{Normalizer, NormalizerError},
};

/// A named, ready-made normalizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    name: &'static str,
    config: NormalizerConfig,
}

impl Profile {
    pub const fn new(name: &'static str, config: NormalizerConfig) -> Self {
        Self { name, config }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn config(&self) -> NormalizerConfig {
        self.config
    }

    pub fn build(&self) -> Result<Normalizer, NormalizerError> {
        Normalizer::with_config(self.config)
    }

    /// Look a preset up by name (`standard`, `conservative`,
    /// `characters_only`, `spacing_only`).
    pub fn by_name(name: &str) -> Option<Self> {
        preset::ALL.iter().map(|preset| preset()).find(|p| p.name == name)
    }
}
