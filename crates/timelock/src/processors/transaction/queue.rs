use crate::{
    error::TimelockError,
    events::TimelockEvent,
    processors::check_authority,
    state::transaction::{TxRecord, TxStatus},
    timelock::Timelock,
    txid::{compute_tx_id, TxId},
    validation::validate_window,
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;
use tracing::{info, warn};

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq, Clone)]
pub struct QueueArgs {
    pub target: Pubkey,
    pub value: u64,
    pub data: Vec<u8>,
    pub scheduled_at: i64,
}

impl TryFrom<&[u8]> for QueueArgs {
    type Error = borsh::io::Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(data)
    }
}

pub(crate) fn process_queue(
    timelock: &mut Timelock,
    caller: &Pubkey,
    args: &QueueArgs,
) -> Result<TxId, TimelockError> {
    check_authority(timelock, caller)?;

    let now = timelock.now();
    validate_window(timelock.config(), now, args.scheduled_at)?;

    let tx_id = compute_tx_id(&args.target, args.value, &args.data, args.scheduled_at);

    // A live entry must not be overwritten; an expired slot is reused.
    if timelock.registry().status(&tx_id) == TxStatus::Queued {
        warn!("Transaction {} is already queued", tx_id);
        return Err(TimelockError::AlreadyQueued(tx_id));
    }

    let record = TxRecord {
        target: args.target,
        value: args.value,
        data: args.data.clone(),
        scheduled_at: args.scheduled_at,
        status: TxStatus::Queued,
    };
    timelock.registry_mut().put(tx_id, record);

    info!(
        "Queued transaction {} for {} at {}",
        tx_id, args.target, args.scheduled_at
    );
    timelock.emit(TimelockEvent::Queue {
        tx_id,
        target: args.target,
        value: args.value,
        data: args.data.clone(),
        scheduled_at: args.scheduled_at,
    });

    Ok(tx_id)
}
