//! Transaction models

use crate::api::wallet::Transaction;
use super::view::{CURRENT_VIEW, HISTORY_VIEW};

/// One fetched transaction list split into its two views, source order kept
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPartition {
    pub current: Vec<Transaction>,
    pub history: Vec<Transaction>,
}

impl TransactionPartition {
    /// Split `transactions` once; zero-amount unspent entries land in neither list
    pub fn partition(transactions: Vec<Transaction>) -> Self {
        let mut partition = TransactionPartition::default();
        for tx in transactions {
            if (HISTORY_VIEW.filter)(&tx) {
                partition.history.push(tx);
            } else if (CURRENT_VIEW.filter)(&tx) {
                partition.current.push(tx);
            }
        }
        partition
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.history.is_empty()
    }
}
