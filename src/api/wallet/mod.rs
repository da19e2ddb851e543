pub mod client;
pub mod models;

pub use client::{WalletApiClient, WalletSource};
pub use models::{ApiError, Balance, CreatedAt, Transaction};
