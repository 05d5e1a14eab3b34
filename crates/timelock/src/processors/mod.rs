pub mod transaction;
pub mod treasury;

use crate::{error::TimelockError, timelock::Timelock};
use solana_program::pubkey::Pubkey;
use tracing::warn;

pub(crate) fn check_authority(timelock: &Timelock, caller: &Pubkey) -> Result<(), TimelockError> {
    if !timelock.is_authorized(caller) {
        warn!("Caller {} is not authorized", caller);
        return Err(TimelockError::NotAuthorized(*caller));
    }
    Ok(())
}
