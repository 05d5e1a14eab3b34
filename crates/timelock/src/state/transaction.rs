use crate::error::{TimelockError, Validate};
use borsh::{BorshDeserialize, BorshSerialize};
use core::fmt;
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

#[repr(u8)]
#[derive(BorshSerialize, BorshDeserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[borsh(use_discriminant = true)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TxStatus {
    #[default]
    NotQueued = 0,
    Queued = 1,
    // Terminal for the current occupancy of the slot, whether executed or canceled.
    Expired = 2,
}

impl From<u8> for TxStatus {
    fn from(value: u8) -> Self {
        match value {
            1 => TxStatus::Queued,
            2 => TxStatus::Expired,
            _ => TxStatus::NotQueued,
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxStatus::NotQueued => write!(f, "not-queued"),
            TxStatus::Queued => write!(f, "queued"),
            TxStatus::Expired => write!(f, "expired"),
        }
    }
}

/// A scheduled call and its lifecycle status.
#[derive(BorshSerialize, BorshDeserialize, Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxRecord {
    pub target: Pubkey, // 32
    pub value: u64,     // 8
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub data: Vec<u8>, // 4 + len
    pub scheduled_at: i64, // 8
    pub status: TxStatus, // 1
}

impl TxRecord {
    pub fn is_queued(&self) -> bool {
        self.status == TxStatus::Queued
    }
}

impl fmt::Display for TxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "target: {}, value: {}, data: {} bytes, scheduled_at: {}, status: {}",
            self.target,
            self.value,
            self.data.len(),
            self.scheduled_at,
            self.status,
        )
    }
}

impl TryFrom<&[u8]> for TxRecord {
    type Error = ProgramError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(data).map_err(|_| ProgramError::InvalidAccountData)
    }
}

impl Validate for TxRecord {
    fn validate(&self) -> Result<(), TimelockError> {
        // Only the zero record may be unqueued.
        if self.status == TxStatus::NotQueued && *self != TxRecord::default() {
            return Err(TimelockError::InvalidRecord);
        }
        Ok(())
    }
}
