//! Balance view models

use crate::api::wallet::Balance;
use crate::utils::group_thousands;

/// Display-ready balance figures
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceDisplay {
    pub btc: String,
    pub eur: String,
}

impl From<&Balance> for BalanceDisplay {
    fn from(balance: &Balance) -> Self {
        BalanceDisplay {
            btc: balance.btc_balance.to_string(),
            eur: group_thousands(balance.eur_balance.as_str()),
        }
    }
}
