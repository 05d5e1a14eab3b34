//! The external call made when a queued transaction executes.
//!
//! The timelock knows nothing about its targets beyond an address and an opaque payload.
//! An [`Invoker`] routes the call and reports success or failure. It receives the timelock
//! itself so that a target may call back into it while the call is in flight.

use crate::{timelock::Timelock, txid::TxId};
use solana_program::{entrypoint::ProgramResult, program_error::ProgramError, pubkey::Pubkey};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Transaction being executed
    pub tx_id: TxId,
    /// Address of the calling timelock
    pub caller: Pubkey,
    /// Target of the call
    pub program_id: Pubkey,
    /// Lamports transferred alongside the call
    pub value: u64,
    /// Entry point selector and arguments
    pub data: &'a [u8],
}

pub trait Invoker {
    fn invoke(&mut self, timelock: &mut Timelock, invocation: &Invocation) -> ProgramResult;
}

/// A callable target.
pub trait Program {
    fn process(&mut self, timelock: &mut Timelock, invocation: &Invocation) -> ProgramResult;
}

/// Routes invocations to programs by address.
#[derive(Default)]
pub struct ProgramRouter {
    programs: HashMap<Pubkey, Box<dyn Program>>,
}

impl ProgramRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_program<P>(&mut self, program_id: Pubkey, program: P) -> &mut Self
    where
        P: Program + 'static,
    {
        self.programs.insert(program_id, Box::new(program));
        self
    }

    pub fn contains(&self, program_id: &Pubkey) -> bool {
        self.programs.contains_key(program_id)
    }
}

impl Invoker for ProgramRouter {
    fn invoke(&mut self, timelock: &mut Timelock, invocation: &Invocation) -> ProgramResult {
        let Some(program) = self.programs.get_mut(&invocation.program_id) else {
            warn!("Unknown target program {}", invocation.program_id);
            return Err(ProgramError::IncorrectProgramId);
        };
        program.process(timelock, invocation)
    }
}
