use crate::error::{HookVecError, Result};

/// Growth multiplier used when none is configured.
pub const DEFAULT_GROWTH_MULTIPLIER: f64 = 1.5;

/// How stored elements are owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    /// Plain values; copies go through the copy hook when set, `Clone` otherwise.
    #[default]
    Inline,
    /// Elements owning a payload that must be duplicated by the copy hook.
    /// A copy hook is mandatory for this kind.
    Owned,
}

/// Construction parameters of a `HookVec`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Ownership model of the elements.
    pub kind: ElementKind,
    /// Factor applied to the capacity when more room is needed. Must be finite and `> 1`.
    pub growth_multiplier: f64,
    /// Capacity to reserve at construction; it also becomes the min-alloc floor.
    pub reserve: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind: ElementKind::Inline,
            growth_multiplier: DEFAULT_GROWTH_MULTIPLIER,
            reserve: 0,
        }
    }
}

impl Config {
    /// Checks the numeric parameters.
    ///
    /// # Errors
    ///
    /// Returns `HookVecError::InvalidConfiguration` if the growth multiplier
    /// is not finite or not greater than 1.
    pub fn validate(&self) -> Result<()> {
        if !self.growth_multiplier.is_finite() || self.growth_multiplier <= 1.0 {
            return Err(HookVecError::InvalidConfiguration {
                parameter: "growth_multiplier",
                reason: "must be finite and greater than 1",
            });
        }
        Ok(())
    }
}
