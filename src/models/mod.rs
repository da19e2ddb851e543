//! Data models for the wallet view renderers
//!
//! View configuration, partitioned transaction lists and render outcomes
//! shared between the services.

pub mod balance;
pub mod transaction;
pub mod view;

pub use balance::BalanceDisplay;
pub use transaction::TransactionPartition;
pub use view::{ListView, RenderOutcome, CURRENT_VIEW, HISTORY_VIEW};
