use crate::txid::TxId;
use solana_program::{program_error::ProgramError, pubkey::Pubkey};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum TimelockError {
    #[error("Caller {0} is not authorized")]
    NotAuthorized(Pubkey),
    #[error("Timestamp {given} not in range [{min_allowed}, {max_allowed}]")]
    TimestampNotInRange {
        min_allowed: i64,
        max_allowed: i64,
        given: i64,
    },
    #[error("Transaction {0} is already queued")]
    AlreadyQueued(TxId),
    #[error("Transaction {0} is not queued")]
    TxNotQueued(TxId),
    #[error("Timestamp {scheduled_at} not passed (now: {now})")]
    TimestampNotPassed { now: i64, scheduled_at: i64 },
    #[error("Transaction expired at {deadline} (now: {now})")]
    TxExpired { now: i64, deadline: i64 },
    #[error("Transaction {0} failed")]
    TransactionFailed(TxId),
    #[error("Invalid delay configuration")]
    InvalidDelayConfig,
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
    #[error("Invalid transaction record")]
    InvalidRecord,
}

impl TimelockError {
    pub fn code(&self) -> u32 {
        match self {
            TimelockError::NotAuthorized(_) => 1,
            TimelockError::TimestampNotInRange { .. } => 2,
            TimelockError::AlreadyQueued(_) => 3,
            TimelockError::TxNotQueued(_) => 4,
            TimelockError::TimestampNotPassed { .. } => 5,
            TimelockError::TxExpired { .. } => 6,
            TimelockError::TransactionFailed(_) => 7,
            TimelockError::InvalidDelayConfig => 8,
            TimelockError::ArithmeticOverflow => 9,
            TimelockError::InvalidRecord => 10,
        }
    }
}

impl From<TimelockError> for ProgramError {
    fn from(e: TimelockError) -> Self {
        ProgramError::Custom(e.code())
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), TimelockError>;
}
