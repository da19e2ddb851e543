use tracing::{error, info};
use crate::api::WalletSource;
use crate::models::{BalanceDisplay, RenderOutcome};
use crate::utils::{escape_html, Region};

/// Build the markup for the balance region
pub fn create_balance_html(figures: &BalanceDisplay) -> String {
    format!(
        "<h2>Your Balance:</h2>\n<p><strong>BTC Balance:</strong> {} ₿ / {} €</p>",
        escape_html(&figures.btc),
        escape_html(&figures.eur)
    )
}

/// Fetch the balance and replace `region` with it.
///
/// A failed fetch is logged and leaves `region` untouched.
pub async fn render_balance<S, R>(source: &S, region: &mut R) -> RenderOutcome
where
    S: WalletSource,
    R: Region,
{
    match source.fetch_balance().await {
        Ok(balance) => {
            let figures = BalanceDisplay::from(&balance);
            region.set_inner_html(create_balance_html(&figures));
            info!("Rendered balance into #{}: {} BTC / {} EUR", region.id(), figures.btc, figures.eur);
            RenderOutcome::Rendered
        }
        Err(e) => {
            error!("Error fetching balance data: {}", e);
            RenderOutcome::Unchanged
        }
    }
}
