pub mod config;
pub mod normalizer;
pub mod pipeline;
pub mod profile;
pub mod protect;
pub mod stage;
pub mod tokenizer;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing {
    pub mod stage_contract;
}

pub use config::NormalizerConfig;
pub use normalizer::{Normalizer, NormalizerBuilder, NormalizerError};
pub use profile::Profile;
pub use stage::{Stage, StageError};
pub use tokenizer::{Tokenizer, TokenizerError};
