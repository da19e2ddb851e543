use chrono::TimeZone;
use tracing::{debug, error, info};
use crate::api::{ApiError, WalletSource};
use crate::api::wallet::Transaction;
use crate::models::{ListView, RenderOutcome, TransactionPartition, CURRENT_VIEW, HISTORY_VIEW};
use crate::utils::{escape_html, format_js_number, format_timestamp, Node, Region};

/// Build the markup for one transaction fragment
pub fn create_transaction_html<Tz>(tx: &Transaction, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "<p class=\"transaction\"><strong>Transaction ID:</strong> {}</p>\
         <p class=\"amount\"><strong>Amount:</strong> {}</p>\
         <p class=\"spent\"><strong>Spent:</strong> {}</p>\
         <p class=\"date\"><strong>Created At:</strong> {}</p>",
        escape_html(&tx.transaction_id),
        format_js_number(tx.amount),
        if tx.spent { "Yes" } else { "No" },
        format_timestamp(&tx.created_at, tz)
    )
}

/// Render one list view into `region`.
///
/// `transactions` is the view's already-filtered list, or the fetch error.
/// The region is cleared once before the first fragment is appended; an
/// empty list or an error leaves only the matching placeholder.
pub fn render_list<R, Tz>(
    view: &ListView,
    transactions: Result<&[Transaction], &ApiError>,
    region: &mut R,
    tz: &Tz,
) -> RenderOutcome
where
    R: Region,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match transactions {
        Ok(list) => {
            let mut cleared = false;
            for tx in list {
                if !cleared {
                    region.clear();
                    cleared = true;
                }
                region.append(Node::div(view.fragment_class, create_transaction_html(tx, tz)));
            }

            if cleared {
                info!("Rendered {} {} into #{}", list.len(), view.label, region.id());
            } else {
                region.clear();
                region.append(Node::text_div(view.empty_placeholder));
                debug!("No {} to render into #{}", view.label, region.id());
            }
            RenderOutcome::Rendered
        }
        Err(e) => {
            region.clear();
            region.append(Node::text_div(view.error_placeholder));
            error!("Error fetching {}: {}", view.label, e);
            RenderOutcome::ErrorRendered
        }
    }
}

/// Fetch the transaction list once and render both list views from it
pub async fn render_transactions<S, C, H, Tz>(
    source: &S,
    current: &mut C,
    history: &mut H,
    tz: &Tz,
) -> (RenderOutcome, RenderOutcome)
where
    S: WalletSource,
    C: Region,
    H: Region,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match source.fetch_transactions().await {
        Ok(transactions) => {
            debug!("Fetched {} transactions", transactions.len());
            let partition = TransactionPartition::partition(transactions);
            if partition.is_empty() {
                debug!("No displayable transactions");
            }
            (
                render_list(&CURRENT_VIEW, Ok(partition.current.as_slice()), current, tz),
                render_list(&HISTORY_VIEW, Ok(partition.history.as_slice()), history, tz),
            )
        }
        Err(e) => (
            render_list(&CURRENT_VIEW, Err(&e), current, tz),
            render_list(&HISTORY_VIEW, Err(&e), history, tz),
        ),
    }
}
