pub mod balance_service;
pub mod transaction_service;

use chrono::TimeZone;
use crate::api::WalletSource;
use crate::models::RenderOutcome;
use crate::utils::Page;

/// Outcome of each region after one page render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletRender {
    pub balance: RenderOutcome,
    pub transactions: RenderOutcome,
    pub history: RenderOutcome,
}

/// Fetch balance and transactions concurrently and render them into `page`
pub async fn render_wallet<S, Tz>(source: &S, page: &mut Page, tz: &Tz) -> WalletRender
where
    S: WalletSource,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let (balance, current, history) = page.regions_mut();

    let (balance_outcome, (current_outcome, history_outcome)) = tokio::join!(
        balance_service::render_balance(source, balance),
        transaction_service::render_transactions(source, current, history, tz),
    );

    WalletRender {
        balance: balance_outcome,
        transactions: current_outcome,
        history: history_outcome,
    }
}
