use super::validation::ValidationError;
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU32;

/// Number of integration steps between Monte Carlo barostat volume moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BarostatFrequency(NonZeroU32);

impl BarostatFrequency {
    pub const DEFAULT: BarostatFrequency = match NonZeroU32::new(500) {
        Some(steps) => BarostatFrequency(steps),
        None => unreachable!(),
    };

    pub fn new(steps: i64) -> Result<Self, ValidationError> {
        u32::try_from(steps)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(ValidationError::InvalidBarostatFrequency(steps))
    }

    #[inline]
    pub fn steps(self) -> u32 {
        self.0.get()
    }
}

impl Default for BarostatFrequency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for BarostatFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps", self.0)
    }
}
