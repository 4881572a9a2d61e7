//! Common types used across the application.

pub mod account;
pub mod amount;

pub use account::AccountNumber;
pub use amount::format_amount;
