use crate::{
    authority::Authority,
    clock::Clock,
    config::TimelockConfig,
    error::{TimelockError, Validate},
    events::TimelockEvent,
    invoke::Invoker,
    processors::{
        transaction::{
            cancel::{process_cancel, CancelArgs},
            execute::{process_execute, ExecuteArgs},
            queue::{process_queue, QueueArgs},
        },
        treasury::deposit::{process_deposit, DepositArgs},
    },
    registry::{Checkpoint, Registry},
    state::transaction::TxRecord,
    txid::{compute_tx_id, TxId},
};
use solana_program::pubkey::Pubkey;
use std::fmt;
use tracing::{debug, warn};

/// A timelock instance: the transaction registry, its lamport balance, the notification
/// log and the collaborators that decide who may act and what time it is.
///
/// Every mutating operation is atomic. If it fails, registry writes, emitted events and
/// balance changes made under it are undone, including those of operations that re-entered
/// the timelock from an external call.
pub struct Timelock {
    address: Pubkey,
    config: TimelockConfig,
    authority: Box<dyn Authority>,
    clock: Box<dyn Clock>,
    registry: Registry,
    events: Vec<TimelockEvent>,
    lamports: u64,
}

impl fmt::Debug for Timelock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timelock")
            .field("address", &self.address)
            .field("config", &self.config)
            .field("transactions", &self.registry.len())
            .field("events", &self.events.len())
            .field("lamports", &self.lamports)
            .finish()
    }
}

impl Timelock {
    pub fn new<A, C>(
        address: Pubkey,
        config: TimelockConfig,
        authority: A,
        clock: C,
    ) -> Result<Self, TimelockError>
    where
        A: Authority + 'static,
        C: Clock + 'static,
    {
        config.validate()?;

        Ok(Self {
            address,
            config,
            authority: Box::new(authority),
            clock: Box::new(clock),
            registry: Registry::new(),
            events: Vec::new(),
            lamports: 0,
        })
    }

    pub fn address(&self) -> &Pubkey {
        &self.address
    }

    pub fn config(&self) -> &TimelockConfig {
        &self.config
    }

    pub fn now(&self) -> i64 {
        self.clock.unix_timestamp()
    }

    pub fn balance(&self) -> u64 {
        self.lamports
    }

    pub fn is_authorized(&self, caller: &Pubkey) -> bool {
        self.authority.is_authorized(caller)
    }

    /// Notifications emitted so far, oldest first.
    pub fn events(&self) -> &[TimelockEvent] {
        &self.events
    }

    /// Takes the notification log. Returns nothing while an operation is in flight, since
    /// its events may still be rolled back.
    pub fn drain_events(&mut self) -> Vec<TimelockEvent> {
        if self.registry.depth() > 0 {
            warn!("Refusing to drain events while an operation is in progress");
            return Vec::new();
        }
        std::mem::take(&mut self.events)
    }

    pub fn get_tx_id(&self, target: &Pubkey, value: u64, data: &[u8], scheduled_at: i64) -> TxId {
        compute_tx_id(target, value, data, scheduled_at)
    }

    /// Returns the zero record (status `NotQueued`) for ids that were never queued.
    pub fn get_tx_info(&self, tx_id: &TxId) -> TxRecord {
        self.registry.get(tx_id)
    }

    pub fn queued(&self) -> impl Iterator<Item = (&TxId, &TxRecord)> {
        self.registry.iter_queued()
    }

    pub fn queue(
        &mut self,
        caller: &Pubkey,
        target: Pubkey,
        value: u64,
        data: Vec<u8>,
        scheduled_at: i64,
    ) -> Result<TxId, TimelockError> {
        let args = QueueArgs {
            target,
            value,
            data,
            scheduled_at,
        };
        self.atomic(|timelock| process_queue(timelock, caller, &args))
    }

    pub fn execute(
        &mut self,
        caller: &Pubkey,
        tx_id: &TxId,
        invoker: &mut dyn Invoker,
    ) -> Result<(), TimelockError> {
        let args = ExecuteArgs { tx_id: *tx_id };
        self.atomic(|timelock| process_execute(timelock, caller, &args, invoker))
    }

    pub fn cancel(&mut self, caller: &Pubkey, tx_id: &TxId) -> Result<(), TimelockError> {
        let args = CancelArgs { tx_id: *tx_id };
        self.atomic(|timelock| process_cancel(timelock, caller, &args))
    }

    /// Adds lamports to the balance that funds transaction values. Returns the new balance.
    pub fn deposit(&mut self, lamports: u64) -> Result<u64, TimelockError> {
        let args = DepositArgs { lamports };
        self.atomic(|timelock| process_deposit(timelock, &args))
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub(crate) fn emit(&mut self, event: TimelockEvent) {
        debug!("Event: {}", event);
        self.events.push(event);
    }

    pub(crate) fn credit(&mut self, lamports: u64) -> Result<u64, TimelockError> {
        self.lamports = self
            .lamports
            .checked_add(lamports)
            .ok_or(TimelockError::ArithmeticOverflow)?;
        Ok(self.lamports)
    }

    /// Returns false, leaving the balance untouched, if it holds fewer than `lamports`.
    pub(crate) fn debit(&mut self, lamports: u64) -> bool {
        match self.lamports.checked_sub(lamports) {
            Some(remaining) => {
                self.lamports = remaining;
                true
            }
            None => false,
        }
    }

    fn atomic<T>(
        &mut self,
        operation: impl FnOnce(&mut Self) -> Result<T, TimelockError>,
    ) -> Result<T, TimelockError> {
        let mut guard = AtomicGuard::open(self);

        match operation(&mut *guard.timelock) {
            Ok(value) => {
                guard.commit();
                Ok(value)
            }
            Err(err) => {
                debug!("Rolling back: {}", err);
                guard.rollback();
                Err(err)
            }
        }
    }
}

/// Open checkpoint over a [`Timelock`]. Rolls back on drop unless closed, so a panic
/// unwinding out of an external call still restores the instance.
struct AtomicGuard<'a> {
    timelock: &'a mut Timelock,
    checkpoint: Checkpoint,
    events_len: usize,
    lamports: u64,
    closed: bool,
}

impl<'a> AtomicGuard<'a> {
    fn open(timelock: &'a mut Timelock) -> Self {
        let checkpoint = timelock.registry.checkpoint();
        let events_len = timelock.events.len();
        let lamports = timelock.lamports;

        Self {
            timelock,
            checkpoint,
            events_len,
            lamports,
            closed: false,
        }
    }

    fn commit(&mut self) {
        self.timelock.registry.commit(self.checkpoint);
        self.closed = true;
    }

    fn rollback(&mut self) {
        self.timelock.registry.rollback(self.checkpoint);
        self.timelock.events.truncate(self.events_len);
        self.timelock.lamports = self.lamports;
        self.closed = true;
    }
}

impl Drop for AtomicGuard<'_> {
    fn drop(&mut self) {
        if !self.closed {
            warn!("Operation did not complete, rolling back");
            self.rollback();
        }
    }
}
