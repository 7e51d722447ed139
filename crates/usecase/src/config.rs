// crates/usecase/src/config.rs
use derive_builder::Builder;
use pdirfile_shared_kernel::{DirError, Result};
use serde::{Deserialize, Serialize};

/// Capacity step used by growable listings when nothing else is configured.
pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

const fn default_growth_increment() -> usize {
    DEFAULT_GROWTH_INCREMENT
}

/// Tunables for the directory lister.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ListerConfig {
    /// Initial capacity of a growable listing, and the amount it grows by
    /// each time it fills up.
    #[builder(default = "DEFAULT_GROWTH_INCREMENT")]
    #[serde(default = "default_growth_increment")]
    pub growth_increment: usize,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self { growth_increment: DEFAULT_GROWTH_INCREMENT }
    }
}

impl ListerConfig {
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `growth_increment` is zero.
    pub fn with_growth_increment(growth_increment: usize) -> Result<Self> {
        let config = Self { growth_increment };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `growth_increment` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.growth_increment == 0 {
            return Err(DirError::InvalidConfiguration {
                field: "growth_increment".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl ListerConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match self.growth_increment {
            Some(0) => Err("growth_increment must be at least 1".into()),
            _ => Ok(()),
        }
    }
}

impl From<ListerConfigBuilderError> for DirError {
    fn from(err: ListerConfigBuilderError) -> Self {
        Self::InvalidConfiguration { field: "lister".into(), reason: err.to_string() }
    }
}
