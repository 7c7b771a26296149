//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::KucoinError;
use crate::rest::KucoinRestClient;
use crate::rest::endpoints::public;
use crate::rest::request::{RequestSpec, required_upper};

impl KucoinRestClient {
    /// Get all open trading symbols with their ticker data.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kucoin_api_client::rest::KucoinRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = KucoinRestClient::new();
    ///     for symbol in client.get_symbols().await? {
    ///         println!("{}: {:?}", symbol.symbol, symbol.last_deal_price);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_symbols(&self) -> Result<Vec<Symbol>, KucoinError> {
        self.execute(RequestSpec::get(public::SYMBOLS)).await
    }

    /// Get the ticker of one trading symbol (e.g. "KCS-BTC").
    pub async fn get_symbol(&self, symbol: &str) -> Result<Symbol, KucoinError> {
        let spec = RequestSpec::get(public::TICK).param("symbol", required_upper("symbol", symbol)?);
        self.execute(spec).await
    }

    /// Get all coins listed on the exchange.
    pub async fn get_coins(&self) -> Result<Vec<Coin>, KucoinError> {
        self.execute(RequestSpec::get(public::COINS)).await
    }

    /// Get details of one coin (e.g. "KCS").
    pub async fn get_coin(&self, coin: &str) -> Result<Coin, KucoinError> {
        let spec = RequestSpec::get(public::COIN_INFO).param("coin", required_upper("coin", coin)?);
        self.execute(spec).await
    }

    /// Get the order book of a symbol.
    pub async fn get_orders_book(
        &self,
        request: &OrdersBookRequest,
    ) -> Result<OrdersBook, KucoinError> {
        self.execute(request.to_spec()?).await
    }
}
