use crate::{config::TimelockConfig, error::TimelockError};

/// Admission check: `now + min_delay <= scheduled_at <= now + max_delay`.
pub fn validate_window(
    config: &TimelockConfig,
    now: i64,
    scheduled_at: i64,
) -> Result<(), TimelockError> {
    let max_allowed = now.saturating_add(config.max_delay);
    let out_of_range = |min_allowed| TimelockError::TimestampNotInRange {
        min_allowed,
        max_allowed,
        given: scheduled_at,
    };

    // An unrepresentable lower bound admits nothing.
    let min_allowed = now
        .checked_add(config.min_delay)
        .ok_or_else(|| out_of_range(i64::MAX))?;

    if scheduled_at < min_allowed || scheduled_at > max_allowed {
        return Err(out_of_range(min_allowed));
    }
    Ok(())
}

/// Execution check: `scheduled_at <= now <= scheduled_at + grace_period`, both ends inclusive.
pub fn validate_execution_window(
    config: &TimelockConfig,
    now: i64,
    scheduled_at: i64,
) -> Result<(), TimelockError> {
    if now < scheduled_at {
        return Err(TimelockError::TimestampNotPassed { now, scheduled_at });
    }

    let deadline = scheduled_at.saturating_add(config.grace_period);
    if now > deadline {
        return Err(TimelockError::TxExpired { now, deadline });
    }
    Ok(())
}
