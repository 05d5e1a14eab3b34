//! Authorization guard consulted at the start of every mutating operation.

use solana_program::pubkey::Pubkey;

#[cfg_attr(test, mockall::automock)]
pub trait Authority {
    fn is_authorized(&self, caller: &Pubkey) -> bool;
}

/// A single controller key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleOwner {
    pub owner: Pubkey,
}

impl SingleOwner {
    pub fn new(owner: Pubkey) -> Self {
        Self { owner }
    }
}

impl Authority for SingleOwner {
    fn is_authorized(&self, caller: &Pubkey) -> bool {
        *caller == self.owner
    }
}

/// Any key on the allowlist may act as the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allowlist {
    pub keys: Vec<Pubkey>,
}

impl Allowlist {
    pub fn new(keys: Vec<Pubkey>) -> Self {
        Self { keys }
    }
}

impl Authority for Allowlist {
    fn is_authorized(&self, caller: &Pubkey) -> bool {
        self.keys.contains(caller)
    }
}
