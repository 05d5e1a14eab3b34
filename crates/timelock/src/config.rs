use crate::{
    constants::{GRACE_PERIOD, MAX_DELAY, MIN_DELAY},
    error::{TimelockError, Validate},
};
use borsh::{BorshDeserialize, BorshSerialize};
use core::fmt;

/// Delay bounds of a timelock instance, in seconds. Fixed when the instance is created.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelockConfig {
    pub min_delay: i64,    // 8
    pub max_delay: i64,    // 8
    pub grace_period: i64, // 8
}

impl Default for TimelockConfig {
    fn default() -> Self {
        Self {
            min_delay: MIN_DELAY,
            max_delay: MAX_DELAY,
            grace_period: GRACE_PERIOD,
        }
    }
}

impl fmt::Display for TimelockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_delay: {}s, max_delay: {}s, grace_period: {}s",
            self.min_delay, self.max_delay, self.grace_period,
        )
    }
}

impl Validate for TimelockConfig {
    fn validate(&self) -> Result<(), TimelockError> {
        if self.min_delay < 0 || self.max_delay < 0 || self.grace_period < 0 {
            return Err(TimelockError::InvalidDelayConfig);
        }
        if self.min_delay > self.max_delay {
            return Err(TimelockError::InvalidDelayConfig);
        }
        Ok(())
    }
}
