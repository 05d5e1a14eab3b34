//! Transaction registry: the authoritative `TxId -> TxRecord` store.
//!
//! Writes made while a checkpoint is open are journaled with the value they replaced, so
//! an operation that fails can restore every slot it touched. Checkpoints nest; a
//! re-entrant operation opens its own checkpoint inside the caller's.

use crate::{
    state::transaction::{TxRecord, TxStatus},
    txid::TxId,
};
use std::collections::HashMap;

/// Position in the write journal returned by [`Registry::checkpoint`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    journal_len: usize,
    depth: usize,
}

#[derive(Debug, Default)]
pub struct Registry {
    records: HashMap<TxId, TxRecord>,
    journal: Vec<(TxId, Option<TxRecord>)>,
    depth: usize,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored record, or the zero (`NotQueued`) record if the id was never written.
    pub fn get(&self, tx_id: &TxId) -> TxRecord {
        self.records.get(tx_id).cloned().unwrap_or_default()
    }

    pub fn status(&self, tx_id: &TxId) -> TxStatus {
        self.records
            .get(tx_id)
            .map(|record| record.status)
            .unwrap_or_default()
    }

    /// Replaces the record stored at `tx_id`.
    pub fn put(&mut self, tx_id: TxId, record: TxRecord) {
        let previous = self.records.insert(tx_id, record);
        if self.depth > 0 {
            self.journal.push((tx_id, previous));
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of checkpoints currently open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn iter_queued(&self) -> impl Iterator<Item = (&TxId, &TxRecord)> {
        self.records.iter().filter(|(_, record)| record.is_queued())
    }

    pub fn checkpoint(&mut self) -> Checkpoint {
        self.depth += 1;
        Checkpoint {
            journal_len: self.journal.len(),
            depth: self.depth,
        }
    }

    /// Keeps every write made since `checkpoint`.
    pub fn commit(&mut self, checkpoint: Checkpoint) {
        debug_assert_eq!(checkpoint.depth, self.depth, "checkpoints must nest");
        self.depth -= 1;
        if self.depth == 0 {
            self.journal.clear();
        }
    }

    /// Undoes every write made since `checkpoint`, newest first.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        debug_assert_eq!(checkpoint.depth, self.depth, "checkpoints must nest");
        while self.journal.len() > checkpoint.journal_len {
            let Some((tx_id, previous)) = self.journal.pop() else {
                break;
            };
            match previous {
                Some(record) => {
                    self.records.insert(tx_id, record);
                }
                None => {
                    self.records.remove(&tx_id);
                }
            }
        }
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::pubkey::Pubkey;

    fn record(status: TxStatus) -> TxRecord {
        TxRecord {
            target: Pubkey::new_unique(),
            value: 0,
            data: vec![1],
            scheduled_at: 100,
            status,
        }
    }

    #[test]
    fn test_registry_get_missing_returns_default() {
        let registry = Registry::new();
        let tx_id = TxId::new([1; 32]);
        assert_eq!(registry.get(&tx_id), TxRecord::default());
        assert_eq!(registry.status(&tx_id), TxStatus::NotQueued);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_put_replaces() {
        let mut registry = Registry::new();
        let tx_id = TxId::new([1; 32]);
        registry.put(tx_id, record(TxStatus::Queued));
        registry.put(tx_id, record(TxStatus::Expired));
        assert_eq!(registry.status(&tx_id), TxStatus::Expired);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_rollback_restores_previous_values() {
        let mut registry = Registry::new();
        let existing = TxId::new([1; 32]);
        let fresh = TxId::new([2; 32]);
        let original = record(TxStatus::Queued);
        registry.put(existing, original.clone());

        let cp = registry.checkpoint();
        registry.put(existing, record(TxStatus::Expired));
        registry.put(fresh, record(TxStatus::Queued));
        registry.rollback(cp);

        assert_eq!(registry.get(&existing), original);
        assert_eq!(registry.status(&fresh), TxStatus::NotQueued);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_nested_rollback_keeps_outer_writes() {
        let mut registry = Registry::new();
        let outer_id = TxId::new([1; 32]);
        let inner_id = TxId::new([2; 32]);

        let outer = registry.checkpoint();
        registry.put(outer_id, record(TxStatus::Queued));

        let inner = registry.checkpoint();
        registry.put(inner_id, record(TxStatus::Queued));
        registry.rollback(inner);

        registry.commit(outer);

        assert_eq!(registry.status(&outer_id), TxStatus::Queued);
        assert_eq!(registry.status(&inner_id), TxStatus::NotQueued);
    }

    #[test]
    fn test_registry_outer_rollback_discards_committed_inner_writes() {
        let mut registry = Registry::new();
        let tx_id = TxId::new([3; 32]);

        let outer = registry.checkpoint();
        let inner = registry.checkpoint();
        registry.put(tx_id, record(TxStatus::Queued));
        registry.commit(inner);
        registry.rollback(outer);

        assert_eq!(registry.status(&tx_id), TxStatus::NotQueued);
    }

    #[test]
    fn test_registry_iter_queued() {
        let mut registry = Registry::new();
        registry.put(TxId::new([1; 32]), record(TxStatus::Queued));
        registry.put(TxId::new([2; 32]), record(TxStatus::Expired));

        let queued: Vec<_> = registry.iter_queued().map(|(id, _)| *id).collect();
        assert_eq!(queued, vec![TxId::new([1; 32])]);
    }
}
