use crate::{
    error::TimelockError, events::TimelockEvent, processors::check_authority,
    state::transaction::TxStatus, timelock::Timelock, txid::TxId,
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;
use tracing::{info, warn};

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq, Clone)]
pub struct CancelArgs {
    pub tx_id: TxId,
}

impl TryFrom<&[u8]> for CancelArgs {
    type Error = borsh::io::Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(data)
    }
}

/// Cancellation has no timing guard: a queued transaction can be canceled before or
/// inside its execution window.
pub(crate) fn process_cancel(
    timelock: &mut Timelock,
    caller: &Pubkey,
    args: &CancelArgs,
) -> Result<(), TimelockError> {
    check_authority(timelock, caller)?;

    let tx_id = args.tx_id;
    let mut record = timelock.registry().get(&tx_id);
    if !record.is_queued() {
        warn!("Transaction {} is not queued ({})", tx_id, record.status);
        return Err(TimelockError::TxNotQueued(tx_id));
    }

    record.status = TxStatus::Expired;
    timelock.registry_mut().put(tx_id, record);

    info!("Canceled transaction {}", tx_id);
    timelock.emit(TimelockEvent::Cancel { tx_id });

    Ok(())
}
