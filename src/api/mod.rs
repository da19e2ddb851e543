pub mod wallet;

pub use wallet::{ApiError, WalletApiClient, WalletSource};
