//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::KucoinError;
use crate::rest::endpoints::public;
use crate::rest::request::{RequestSpec, required_upper};

/// Trading symbol with its latest ticker figures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Traded coin (e.g. "KCS").
    pub coin_type: String,
    /// Whether trading is enabled.
    #[serde(default)]
    pub trading: bool,
    /// Symbol name (e.g. "KCS-BTC").
    pub symbol: String,
    /// Last traded price.
    #[serde(default)]
    pub last_deal_price: Option<Decimal>,
    /// Best bid.
    #[serde(default)]
    pub buy: Option<Decimal>,
    /// Best ask.
    #[serde(default)]
    pub sell: Option<Decimal>,
    /// 24h absolute change.
    #[serde(default)]
    pub change: Option<Decimal>,
    /// Quote coin (e.g. "BTC").
    pub coin_type_pair: String,
    /// Display ordering.
    #[serde(default)]
    pub sort: i64,
    /// Trading fee rate.
    #[serde(default)]
    pub fee_rate: Decimal,
    /// 24h volume in the quote coin.
    #[serde(default)]
    pub vol_value: Decimal,
    /// 24h high.
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Snapshot time in milliseconds.
    #[serde(default)]
    pub datetime: i64,
    /// 24h volume in the traded coin.
    #[serde(default)]
    pub vol: Decimal,
    /// 24h low.
    #[serde(default)]
    pub low: Option<Decimal>,
    /// 24h relative change.
    #[serde(default)]
    pub change_rate: Option<Decimal>,
    #[serde(default)]
    pub stick: bool,
    #[serde(default)]
    pub fav: bool,
}

/// Coin metadata including deposit/withdrawal settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    /// Coin code (e.g. "KCS").
    pub coin: String,
    /// Full name.
    pub name: String,
    /// Minimum withdrawal fee.
    #[serde(default)]
    pub withdraw_min_fee: Decimal,
    /// Minimum withdrawal amount.
    #[serde(default)]
    pub withdraw_min_amount: Decimal,
    /// Withdrawal fee rate.
    #[serde(default)]
    pub withdraw_fee_rate: Decimal,
    /// Confirmations required for deposits.
    #[serde(default)]
    pub confirmation_count: u32,
    #[serde(default)]
    pub withdraw_remark: Option<String>,
    #[serde(default)]
    pub info_url: Option<serde_json::Value>,
    /// Decimal places accepted for amounts.
    #[serde(default)]
    pub trade_precision: u32,
    #[serde(default)]
    pub deposit_remark: Option<serde_json::Value>,
    /// Whether withdrawals are open.
    #[serde(default)]
    pub enable_withdraw: bool,
    /// Whether deposits are open.
    #[serde(default)]
    pub enable_deposit: bool,
}

/// Aggregated order book.
///
/// Each level is `[price, amount, volume]`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersBook {
    #[serde(rename = "_comment", default)]
    pub comment: Option<String>,
    /// Ask levels.
    #[serde(rename = "SELL", default)]
    pub sell: Vec<Vec<Decimal>>,
    /// Bid levels.
    #[serde(rename = "BUY", default)]
    pub buy: Vec<Vec<Decimal>>,
}

/// Request for an order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersBookRequest {
    /// Symbol (e.g. "KCS-BTC").
    pub symbol: String,
    /// Price aggregation group.
    pub group: Option<u32>,
    /// Maximum levels per side.
    pub limit: Option<u32>,
}

impl OrdersBookRequest {
    /// Create a request for the full book of `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            group: None,
            limit: None,
        }
    }

    /// Set the price aggregation group.
    pub fn group(mut self, group: u32) -> Self {
        self.group = Some(group);
        self
    }

    /// Set the maximum levels per side.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_spec(&self) -> Result<RequestSpec, KucoinError> {
        Ok(RequestSpec::get(public::ORDERS_BOOK)
            .param("symbol", required_upper("symbol", &self.symbol)?)
            .param_opt("group", self.group)
            .param_opt("limit", self.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_deserialize() {
        let json = r#"{
            "coinType": "KCS",
            "trading": true,
            "symbol": "KCS-BTC",
            "lastDealPrice": 0.00012,
            "buy": 0.000119,
            "sell": 0.000121,
            "coinTypePair": "BTC",
            "sort": 0,
            "feeRate": 0.001,
            "volValue": 12.5,
            "datetime": 1700000000000,
            "vol": 104000.25
        }"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        assert_eq!(symbol.symbol, "KCS-BTC");
        assert_eq!(symbol.last_deal_price, Some("0.00012".parse().unwrap()));
        assert_eq!(symbol.vol, "104000.25".parse::<Decimal>().unwrap());
        assert!(symbol.high.is_none());
        assert!(!symbol.fav);
    }

    #[test]
    fn test_orders_book_deserialize() {
        let json = r#"{
            "_comment": "arr[0] Price arr[1] Amount arr[2] Volume",
            "SELL": [[0.000121, 100, 0.0121]],
            "BUY": [[0.000119, 50.5, 0.0060095], [0.000118, 10, 0.00118]]
        }"#;
        let book: OrdersBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.sell.len(), 1);
        assert_eq!(book.buy.len(), 2);
        assert_eq!(book.buy[0][1], "50.5".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_orders_book_request_params() {
        let spec = OrdersBookRequest::new("kcs-btc").limit(20).to_spec().unwrap();
        assert_eq!(spec.path(), "open/orders");
        assert_eq!(spec.canonical_form(), "limit=20&symbol=KCS-BTC");
        assert!(!spec.auth_needed());
    }
}
