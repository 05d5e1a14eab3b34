use crate::constants::SEED_TXID;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    hash::{hashv, Hash, ParseHashError},
    pubkey::Pubkey,
};
use std::{fmt, str::FromStr};

/// Content-addressed identifier of a queued transaction.
///
/// Two transactions with the same target, value, data and scheduled timestamp share the
/// same id. The id is the registry key, so re-queueing an identical call reuses its slot.
#[derive(
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxId([u8; 32]);

impl TxId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl AsRef<[u8]> for TxId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Hash> for TxId {
    fn from(hash: Hash) -> Self {
        Self(hash.to_bytes())
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Hash::new_from_array(self.0))
    }
}

impl FromStr for TxId {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_str(s).map(Self::from)
    }
}

/// Derives the id of `(target, value, data, scheduled_at)`.
///
/// Every field is hashed either at a fixed width or behind a u64 length prefix, so no two
/// distinct tuples produce the same preimage.
pub fn compute_tx_id(target: &Pubkey, value: u64, data: &[u8], scheduled_at: i64) -> TxId {
    let data_len = (data.len() as u64).to_le_bytes();

    hashv(&[
        SEED_TXID,
        target.as_ref(),
        &value.to_le_bytes(),
        &data_len,
        data,
        &scheduled_at.to_le_bytes(),
    ])
    .into()
}
