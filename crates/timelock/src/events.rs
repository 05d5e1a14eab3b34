use crate::txid::TxId;
use borsh::{BorshDeserialize, BorshSerialize};
use core::fmt;
use solana_program::pubkey::Pubkey;

/// Notifications emitted by successful lifecycle operations, at most one per operation.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimelockEvent {
    Queue {
        tx_id: TxId,
        target: Pubkey,
        value: u64,
        #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
        data: Vec<u8>,
        scheduled_at: i64,
    },
    Execute {
        tx_id: TxId,
        target: Pubkey,
        value: u64,
        #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
        data: Vec<u8>,
        scheduled_at: i64,
    },
    Cancel {
        tx_id: TxId,
    },
}

impl TimelockEvent {
    pub fn tx_id(&self) -> &TxId {
        match self {
            TimelockEvent::Queue { tx_id, .. }
            | TimelockEvent::Execute { tx_id, .. }
            | TimelockEvent::Cancel { tx_id } => tx_id,
        }
    }
}

impl fmt::Display for TimelockEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelockEvent::Queue {
                tx_id,
                target,
                value,
                scheduled_at,
                ..
            } => write!(
                f,
                "Queue(tx_id: {tx_id}, target: {target}, value: {value}, scheduled_at: {scheduled_at})"
            ),
            TimelockEvent::Execute {
                tx_id,
                target,
                value,
                scheduled_at,
                ..
            } => write!(
                f,
                "Execute(tx_id: {tx_id}, target: {target}, value: {value}, scheduled_at: {scheduled_at})"
            ),
            TimelockEvent::Cancel { tx_id } => write!(f, "Cancel(tx_id: {tx_id})"),
        }
    }
}
