//! Transaction list view configuration

use crate::api::wallet::Transaction;

/// How one transaction list view filters and labels its content
#[derive(Debug, Clone, Copy)]
pub struct ListView {
    /// Name used in logs
    pub label: &'static str,
    pub filter: fn(&Transaction) -> bool,
    /// Class of the `<div>` wrapping each transaction fragment
    pub fragment_class: &'static str,
    pub empty_placeholder: &'static str,
    pub error_placeholder: &'static str,
}

/// Unspent transactions with a non-zero amount
pub const CURRENT_VIEW: ListView = ListView {
    label: "unspent transactions",
    filter: Transaction::is_current,
    fragment_class: "transaction",
    empty_placeholder: "No transaction history",
    error_placeholder: "Error fetching unspent transactions",
};

/// Spent transactions
pub const HISTORY_VIEW: ListView = ListView {
    label: "transaction history",
    filter: Transaction::is_history,
    fragment_class: "transactionHistory",
    empty_placeholder: "No transaction history",
    error_placeholder: "Error fetching transaction history",
};

/// Terminal state a renderer reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Fragments or the empty placeholder were attached
    Rendered,
    /// The error placeholder was attached
    ErrorRendered,
    /// The fetch failed and the region was left as it was
    Unchanged,
}
