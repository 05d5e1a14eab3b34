use crate::{
    error::TimelockError,
    events::TimelockEvent,
    invoke::{Invocation, Invoker},
    processors::check_authority,
    state::transaction::TxStatus,
    timelock::Timelock,
    txid::TxId,
    validation::validate_execution_window,
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;
use tracing::{info, warn};

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq, Clone)]
pub struct ExecuteArgs {
    pub tx_id: TxId,
}

impl TryFrom<&[u8]> for ExecuteArgs {
    type Error = borsh::io::Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(data)
    }
}

pub(crate) fn process_execute(
    timelock: &mut Timelock,
    caller: &Pubkey,
    args: &ExecuteArgs,
    invoker: &mut dyn Invoker,
) -> Result<(), TimelockError> {
    check_authority(timelock, caller)?;

    let tx_id = args.tx_id;
    let mut record = timelock.registry().get(&tx_id);
    if !record.is_queued() {
        warn!("Transaction {} is not queued ({})", tx_id, record.status);
        return Err(TimelockError::TxNotQueued(tx_id));
    }

    let now = timelock.now();
    validate_execution_window(timelock.config(), now, record.scheduled_at)?;

    // Expire before calling out so a re-entrant execute of the same id reads it as consumed.
    record.status = TxStatus::Expired;
    timelock.registry_mut().put(tx_id, record.clone());

    if !timelock.debit(record.value) {
        warn!(
            "Transaction {} needs {} lamports, timelock holds {}",
            tx_id,
            record.value,
            timelock.balance()
        );
        return Err(TimelockError::TransactionFailed(tx_id));
    }

    let invocation = Invocation {
        tx_id,
        caller: *timelock.address(),
        program_id: record.target,
        value: record.value,
        data: &record.data,
    };
    if let Err(err) = invoker.invoke(timelock, &invocation) {
        warn!("Transaction {} call into {} failed: {}", tx_id, record.target, err);
        return Err(TimelockError::TransactionFailed(tx_id));
    }

    info!("Executed transaction {} on {}", tx_id, record.target);
    timelock.emit(TimelockEvent::Execute {
        tx_id,
        target: record.target,
        value: record.value,
        data: record.data,
        scheduled_at: record.scheduled_at,
    });

    Ok(())
}
