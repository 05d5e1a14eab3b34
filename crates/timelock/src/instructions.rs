use borsh::BorshSerialize;
use solana_program::program_error::ProgramError;

pub use crate::processors::{
    transaction::{cancel::CancelArgs, execute::ExecuteArgs, queue::QueueArgs},
    treasury::deposit::DepositArgs,
};

// Instruction indices
pub const QUEUE: u8 = 0;
pub const EXECUTE: u8 = 1;
pub const CANCEL: u8 = 2;
pub const DEPOSIT: u8 = 3;

#[derive(BorshSerialize, Debug, PartialEq, Clone)]
pub enum TimelockInstruction {
    Queue(QueueArgs),
    Execute(ExecuteArgs),
    Cancel(CancelArgs),
    Deposit(DepositArgs),
}

impl TimelockInstruction {
    pub fn pack(&self) -> Vec<u8> {
        borsh::to_vec(&self).unwrap()
    }

    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let (&instruction, rest) = data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;

        match instruction {
            QUEUE => Ok(Self::Queue(
                QueueArgs::try_from(rest).map_err(|_| ProgramError::InvalidInstructionData)?,
            )),
            EXECUTE => Ok(Self::Execute(
                ExecuteArgs::try_from(rest).map_err(|_| ProgramError::InvalidInstructionData)?,
            )),
            CANCEL => Ok(Self::Cancel(
                CancelArgs::try_from(rest).map_err(|_| ProgramError::InvalidInstructionData)?,
            )),
            DEPOSIT => Ok(Self::Deposit(
                DepositArgs::try_from(rest).map_err(|_| ProgramError::InvalidInstructionData)?,
            )),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txid::TxId;
    use solana_program::pubkey::Pubkey;

    fn test_instruction(instruction: TimelockInstruction) {
        let packed = instruction.pack();
        let unpacked = TimelockInstruction::unpack(&packed).unwrap();
        assert_eq!(instruction, unpacked, "Instruction mismatch");
    }

    #[test]
    fn test_pack_unpack_all_instructions() {
        test_instruction(TimelockInstruction::Queue(QueueArgs {
            target: Pubkey::new_unique(),
            value: 42,
            data: vec![0xab, 0x12, 0x36],
            scheduled_at: 1_700_086_401,
        }));
        test_instruction(TimelockInstruction::Execute(ExecuteArgs {
            tx_id: TxId::new([3; 32]),
        }));
        test_instruction(TimelockInstruction::Cancel(CancelArgs {
            tx_id: TxId::new([4; 32]),
        }));
        test_instruction(TimelockInstruction::Deposit(DepositArgs { lamports: 1_000 }));
    }

    #[test]
    fn test_instruction_discriminants() {
        let packed = TimelockInstruction::Cancel(CancelArgs {
            tx_id: TxId::default(),
        })
        .pack();
        assert_eq!(packed[0], CANCEL);
        assert_eq!(packed.len(), 1 + 32);
    }

    #[test]
    fn test_unpack_invalid() {
        assert_eq!(
            TimelockInstruction::unpack(&[]).unwrap_err(),
            ProgramError::InvalidInstructionData,
        );
        assert_eq!(
            TimelockInstruction::unpack(&[255]).unwrap_err(),
            ProgramError::InvalidInstructionData,
        );
        // Truncated tx id
        assert_eq!(
            TimelockInstruction::unpack(&[EXECUTE, 1, 2, 3]).unwrap_err(),
            ProgramError::InvalidInstructionData,
        );
    }

    #[test]
    fn test_unpack_rejects_trailing_bytes() {
        let mut packed = TimelockInstruction::Deposit(DepositArgs { lamports: 5 }).pack();
        packed.push(0);
        assert_eq!(
            TimelockInstruction::unpack(&packed).unwrap_err(),
            ProgramError::InvalidInstructionData,
        );
    }
}
