use crate::{instructions::TimelockInstruction, invoke::Invoker, timelock::Timelock};
use solana_program::{entrypoint::ProgramResult, pubkey::Pubkey};
use tracing::debug;

/// Decodes a packed [`TimelockInstruction`] and runs it against `timelock` on behalf of
/// `caller`. Targets use this to call back into the timelock while they are being executed.
pub fn process_instruction(
    timelock: &mut Timelock,
    invoker: &mut dyn Invoker,
    caller: &Pubkey,
    data: &[u8],
) -> ProgramResult {
    let instruction = TimelockInstruction::unpack(data)?;

    debug!("Instruction: {:?}", instruction);

    match instruction {
        TimelockInstruction::Queue(args) => {
            timelock.queue(
                caller,
                args.target,
                args.value,
                args.data,
                args.scheduled_at,
            )?;
        }
        TimelockInstruction::Execute(args) => timelock.execute(caller, &args.tx_id, invoker)?,
        TimelockInstruction::Cancel(args) => timelock.cancel(caller, &args.tx_id)?,
        TimelockInstruction::Deposit(args) => {
            timelock.deposit(args.lamports)?;
        }
    };

    Ok(())
}
