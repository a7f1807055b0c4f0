//! Presenters that turn a ledger's remaining allowance into user-facing text.

pub mod calories;
pub mod cash;

pub use calories::CalorieView;
pub use cash::CashView;
