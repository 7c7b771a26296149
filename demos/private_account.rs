//! Example: Private account, order and wallet endpoints.
//!
//! Reads `KUCOIN_API_KEY` and `KUCOIN_API_SECRET` from the environment
//! (or a `.env` file). Set `KUCOIN_DEBUG=1` to dump requests and responses.
//!
//! Run with: cargo run --example private_account

use std::sync::Arc;

use kucoin_api_client::auth::EnvCredentials;
use kucoin_api_client::rest::KucoinRestClient;
use kucoin_api_client::rest::private::{
    AccountHistoryRequest, CoinBalancesRequest, MergedDealtOrdersRequest,
};
use kucoin_api_client::{TransferStatus, TransferType};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set KUCOIN_API_KEY and KUCOIN_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let debug = std::env::var("KUCOIN_DEBUG").ok().as_deref() == Some("1");
    let client = KucoinRestClient::builder()
        .credentials(credentials)
        .user_agent("kucoin-api-client-examples/private_account")
        .debug(debug)
        .build();

    println!("=== User ===");
    let user = client.get_user_info().await?;
    println!("{} <{}>, fee rate {}", user.name, user.email, user.base_fee_rate);

    println!("\n=== Balances ===");
    let balances = client
        .get_coin_balances(Some(&CoinBalancesRequest {
            limit: Some(20),
            page: Some(1),
        }))
        .await?;
    for balance in balances.iter().filter(|b| !b.balance.is_zero()) {
        println!(
            "{}: {} (frozen {})",
            balance.coin_type, balance.balance, balance.freeze_balance
        );
    }

    println!("\n=== Deposit Address ===");
    let address = client.get_coin_deposit_address("KCS").await?;
    println!("{}", address.address);

    println!("\n=== Active Orders ===");
    let active = client.list_active_map_orders("KCS-BTC", None).await?;
    println!("{} asks, {} bids", active.sell.len(), active.buy.len());

    println!("\n=== Recent Fills ===");
    let dealt = client
        .list_merged_dealt_orders(Some(&MergedDealtOrdersRequest::default()))
        .await?;
    for fill in &dealt.datas {
        println!(
            "{} {}-{} {} @ {}",
            fill.direction, fill.coin_type, fill.coin_type_pair, fill.amount, fill.deal_price
        );
    }

    println!("\n=== Deposits ===");
    let history = client
        .account_history(&AccountHistoryRequest::new(
            "KCS",
            TransferType::Deposit,
            TransferStatus::Finished,
        ))
        .await?;
    println!("{} finished deposits", history.total);

    Ok(())
}
