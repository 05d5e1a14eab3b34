/// Minimum delay between queueing a transaction and its scheduled timestamp (1 day)
pub const MIN_DELAY: i64 = 24 * 60 * 60;

/// Maximum delay between queueing a transaction and its scheduled timestamp (30 days)
pub const MAX_DELAY: i64 = 30 * 24 * 60 * 60;

/// How long a transaction stays executable after its scheduled timestamp (7 days)
pub const GRACE_PERIOD: i64 = 7 * 24 * 60 * 60;

/// Domain separator hashed in front of every transaction id preimage
pub const SEED_TXID: &[u8] = b"doublezero_timelock_txid";
