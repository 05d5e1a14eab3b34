pub mod deposit;
