pub mod cancel;
pub mod execute;
pub mod queue;
