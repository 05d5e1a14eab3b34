//! DoubleZero Timelock - delayed, authorized execution of arbitrary calls
//!
//! A controller queues a call `(target, value, data)` together with the timestamp at which
//! it becomes executable. The call can run exactly once, inside
//! `[scheduled_at, scheduled_at + grace_period]`, and can be canceled at any time before
//! that. Every mutating operation is all-or-nothing.

pub mod authority;
pub mod clock;
pub mod config;
pub mod constants;
pub mod entrypoint;
pub mod error;
pub mod events;
pub mod instructions;
pub mod invoke;
pub mod processors;
pub mod registry;
pub mod state;
pub mod timelock;
pub mod txid;
pub mod validation;

pub use authority::{Allowlist, Authority, SingleOwner};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TimelockConfig;
pub use error::{TimelockError, Validate};
pub use events::TimelockEvent;
pub use invoke::{Invocation, Invoker, Program, ProgramRouter};
pub use state::transaction::{TxRecord, TxStatus};
pub use timelock::Timelock;
pub use txid::{compute_tx_id, TxId};
