use crate::{error::TimelockError, timelock::Timelock};
use borsh::{BorshDeserialize, BorshSerialize};
use tracing::info;

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq, Clone)]
pub struct DepositArgs {
    pub lamports: u64,
}

impl TryFrom<&[u8]> for DepositArgs {
    type Error = borsh::io::Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(data)
    }
}

/// Funds the lamports that executed transactions forward to their targets. Anyone may deposit.
pub(crate) fn process_deposit(
    timelock: &mut Timelock,
    args: &DepositArgs,
) -> Result<u64, TimelockError> {
    let balance = timelock.credit(args.lamports)?;

    info!(
        "Deposited {} lamports, balance is now {}",
        args.lamports, balance
    );

    Ok(balance)
}
