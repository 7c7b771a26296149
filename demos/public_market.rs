//! Example: Fetching public market data from KuCoin.
//!
//! No credentials are needed for these endpoints.
//!
//! Run with: cargo run --example public_market

use kucoin_api_client::rest::KucoinRestClient;
use kucoin_api_client::rest::public::OrdersBookRequest;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = KucoinRestClient::new();

    println!("=== Symbols ===");
    let symbols = client.get_symbols().await?;
    for symbol in symbols.iter().filter(|s| s.trading).take(5) {
        println!(
            "{}: last={:?} vol={}",
            symbol.symbol, symbol.last_deal_price, symbol.vol
        );
    }

    println!("\n=== Ticker ===");
    let tick = client.get_symbol("KCS-BTC").await?;
    println!(
        "{} buy={:?} sell={:?} change={:?}",
        tick.symbol, tick.buy, tick.sell, tick.change_rate
    );

    println!("\n=== Coin ===");
    let coin = client.get_coin("KCS").await?;
    println!(
        "{} ({}) min withdrawal {} fee {}",
        coin.coin, coin.name, coin.withdraw_min_amount, coin.withdraw_min_fee
    );

    println!("\n=== Order Book ===");
    let book = client
        .get_orders_book(&OrdersBookRequest::new("KCS-BTC").limit(5))
        .await?;
    for level in &book.sell {
        println!("ask {:?}", level);
    }
    for level in &book.buy {
        println!("bid {:?}", level);
    }

    Ok(())
}
