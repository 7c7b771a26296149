//! Types for private REST API endpoints.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

use crate::error::KucoinError;
use crate::rest::endpoints::private;
use crate::rest::request::{RequestSpec, required_upper};
use crate::types::{Side, TransferStatus, TransferType};

/// Page size used when the caller does not pick one for history queries.
pub const DEFAULT_HISTORY_LIMIT: u32 = 1000;

/// Decimal places used for order prices and amounts.
pub const ORDER_DECIMALS: u32 = 8;
/// Largest page of merged dealt orders when filtering by symbol.
pub const MERGED_LIMIT_WITH_SYMBOL: u32 = 100;
/// Largest page of merged dealt orders across all symbols.
pub const MERGED_LIMIT_ALL_SYMBOLS: u32 = 20;

// ========== Account ==========

/// Account profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// User identifier.
    pub oid: String,
    #[serde(rename = "referrer_code", default)]
    pub referrer_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nickname: Option<serde_json::Value>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub language: String,
    /// Display currency.
    #[serde(default)]
    pub currency: String,
    /// Base trading fee rate.
    #[serde(default)]
    pub base_fee_rate: Decimal,
    #[serde(default)]
    pub has_credential: bool,
    #[serde(default)]
    pub credential_number: String,
    #[serde(default)]
    pub credential_validated: bool,
    #[serde(default)]
    pub photo_credential_validated: bool,
    #[serde(default)]
    pub video_validated: bool,
    #[serde(default)]
    pub phone_validated: bool,
    #[serde(default)]
    pub email_validated: bool,
    #[serde(default)]
    pub google_two_fa_binding: bool,
    #[serde(default)]
    pub has_trade_password: bool,
    /// Last and current login.
    #[serde(default)]
    pub login_record: Option<LoginRecord>,
}

/// Login history of the account.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRecord {
    pub last: Option<LoginEntry>,
    pub current: Option<LoginEntry>,
}

/// A single login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginEntry {
    pub ip: String,
    #[serde(default)]
    pub context: Option<serde_json::Value>,
    /// Login time in milliseconds.
    pub time: i64,
}

/// Balance of one coin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalance {
    /// Coin code.
    pub coin_type: String,
    /// Available balance.
    pub balance: Decimal,
    /// Balance frozen by open orders or withdrawals.
    #[serde(default)]
    pub freeze_balance: Decimal,
}

/// One page of balances.
pub type CoinBalances = Vec<CoinBalance>;

/// Paging for the balances listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinBalancesRequest {
    /// Page size.
    pub limit: Option<u32>,
    /// Page number, starting at 1.
    pub page: Option<u32>,
}

impl CoinBalancesRequest {
    pub(crate) fn to_spec(&self) -> RequestSpec {
        RequestSpec::get(private::BALANCES)
            .param_opt("limit", self.limit.filter(|l| *l > 0))
            .param_opt("page", self.page.filter(|p| *p > 0))
            .authenticated()
    }
}

/// Deposit address of one coin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDepositAddress {
    pub oid: String,
    /// Address to deposit to.
    pub address: String,
    /// Memo/tag, for coins that need one.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
    #[serde(default)]
    pub user_oid: String,
    pub coin_type: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub deleted_at: Option<serde_json::Value>,
    #[serde(default)]
    pub updated_at: i64,
    /// Time of the last deposit received, in milliseconds.
    #[serde(default)]
    pub last_received_at: i64,
}

// ========== Orders ==========

/// Active orders as raw arrays, split by side.
///
/// Each row is `[time, type, price, amount, dealAmount, orderOid]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveOrders {
    #[serde(rename = "SELL", default)]
    pub sell: Vec<Vec<serde_json::Value>>,
    #[serde(rename = "BUY", default)]
    pub buy: Vec<Vec<serde_json::Value>>,
}

/// Active orders as objects, split by side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveMapOrders {
    #[serde(rename = "SELL", default)]
    pub sell: Vec<ActiveMapOrder>,
    #[serde(rename = "BUY", default)]
    pub buy: Vec<ActiveMapOrder>,
}

/// One active order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveMapOrder {
    /// Order identifier.
    pub oid: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: Side,
    #[serde(default)]
    pub user_oid: Option<serde_json::Value>,
    /// Traded coin.
    pub coin_type: String,
    /// Quote coin.
    pub coin_type_pair: String,
    #[serde(default)]
    pub direction: String,
    /// Limit price.
    pub price: Decimal,
    /// Filled amount.
    #[serde(default)]
    pub deal_amount: Decimal,
    /// Remaining amount.
    #[serde(default)]
    pub pending_amount: Decimal,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Request to place a limit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    /// Symbol (e.g. "KCS-BTC").
    pub symbol: String,
    /// Buy or sell.
    pub side: Side,
    /// Limit price.
    pub price: Decimal,
    /// Amount of the traded coin.
    pub amount: Decimal,
}

impl CreateOrderRequest {
    /// Create a new order request.
    pub fn new(symbol: impl Into<String>, side: Side, price: Decimal, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            price,
            amount,
        }
    }

    pub(crate) fn to_spec(&self) -> Result<RequestSpec, KucoinError> {
        let price = order_decimal(self.price);
        let amount = order_decimal(self.amount);
        // Checked after rounding so nothing goes out as 0.00000000.
        if price <= Decimal::ZERO || amount <= Decimal::ZERO {
            return Err(KucoinError::InvalidRequest(
                "Order price and amount must be at least 0.00000001".to_string(),
            ));
        }
        Ok(RequestSpec::post(private::CREATE_ORDER)
            .param("symbol", required_upper("symbol", &self.symbol)?)
            .param("type", self.side.as_str())
            .param("price", format!("{price:.8}"))
            .param("amount", format!("{amount:.8}"))
            .authenticated())
    }
}

/// Round an order price or amount to the 8 decimal places the exchange accepts.
fn order_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(ORDER_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Identifier of a newly placed order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreated {
    /// Order identifier.
    #[serde(rename = "orderOid")]
    pub order_oid: String,
}

/// Request to cancel an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderRequest {
    /// Symbol the order was placed on.
    pub symbol: String,
    /// Order identifier.
    pub order_oid: String,
    /// Side of the order.
    pub side: Side,
}

impl CancelOrderRequest {
    /// Create a new cancel request.
    pub fn new(symbol: impl Into<String>, order_oid: impl Into<String>, side: Side) -> Self {
        Self {
            symbol: symbol.into(),
            order_oid: order_oid.into(),
            side,
        }
    }

    pub(crate) fn to_spec(&self) -> Result<RequestSpec, KucoinError> {
        Ok(RequestSpec::post(private::CANCEL_ORDER)
            .param("symbol", required_upper("symbol", &self.symbol)?)
            .param("orderOid", required("orderOid", &self.order_oid)?)
            .param("type", self.side.as_str())
            .authenticated())
    }
}

/// Request for the details and fills of one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailsRequest {
    pub symbol: String,
    pub side: Side,
    pub order_oid: String,
    /// Fills per page.
    pub limit: Option<u32>,
    /// Fill page, starting at 1.
    pub page: Option<u32>,
}

impl OrderDetailsRequest {
    /// Create a new details request.
    pub fn new(symbol: impl Into<String>, side: Side, order_oid: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_oid: order_oid.into(),
            limit: None,
            page: None,
        }
    }

    pub(crate) fn to_spec(&self) -> Result<RequestSpec, KucoinError> {
        Ok(RequestSpec::get(private::ORDER_DETAILS)
            .param("symbol", required_upper("symbol", &self.symbol)?)
            .param("type", self.side.as_str())
            .param("orderOid", required("orderOid", &self.order_oid)?)
            .param_opt("limit", self.limit.filter(|l| *l > 0))
            .param_opt("page", self.page.filter(|p| *p > 0))
            .authenticated())
    }
}

/// Details of one order with its fills.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_oid: String,
    /// Buy or sell.
    #[serde(rename = "type")]
    pub side: Side,
    pub coin_type: String,
    pub coin_type_pair: String,
    #[serde(default)]
    pub user_oid: String,
    /// Limit price.
    #[serde(default)]
    pub order_price: Decimal,
    #[serde(default)]
    pub deal_amount: Decimal,
    #[serde(default)]
    pub pending_amount: Decimal,
    #[serde(default)]
    pub deal_value_total: Decimal,
    #[serde(default)]
    pub deal_price_average: Decimal,
    #[serde(default)]
    pub fee_total: Decimal,
    /// Paged fills.
    #[serde(default)]
    pub deal_orders: DealOrders,
}

/// A page of fills.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealOrders {
    pub total: u64,
    pub first_page: bool,
    pub last_page: bool,
    pub datas: Vec<OrderFill>,
    pub curr_page_no: u32,
    pub limit: u32,
    pub page_nos: u32,
}

/// One fill of an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFill {
    pub amount: Decimal,
    pub deal_value: Decimal,
    pub fee: Decimal,
    pub deal_price: Decimal,
    pub fee_rate: Decimal,
}

/// Request for the dealt orders of one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificDealtOrdersRequest {
    pub symbol: String,
    pub side: Side,
    /// Page size; defaults to [`DEFAULT_HISTORY_LIMIT`].
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl SpecificDealtOrdersRequest {
    /// Create a request for the first page.
    pub fn new(symbol: impl Into<String>, side: Side) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            limit: None,
            page: None,
        }
    }

    pub(crate) fn to_spec(&self) -> Result<RequestSpec, KucoinError> {
        Ok(RequestSpec::get(private::DEAL_ORDERS)
            .param("symbol", required_upper("symbol", &self.symbol)?)
            .param("type", self.side.as_str())
            .param("limit", history_limit(self.limit).to_string())
            .param_opt("page", self.page.filter(|p| *p > 0))
            .authenticated())
    }
}

/// A page of dealt orders for one symbol.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecificDealtOrders {
    pub datas: Vec<SpecificDealtOrder>,
    pub total: u64,
    pub limit: u32,
    pub page_nos: u32,
    pub curr_page_no: u32,
    pub navigate_page_nos: Vec<u32>,
    pub user_oid: String,
    pub direction: Option<serde_json::Value>,
    pub start_row: u64,
    pub first_page: bool,
    pub last_page: bool,
}

/// One dealt order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificDealtOrder {
    pub oid: String,
    pub order_oid: String,
    pub deal_price: Decimal,
    pub direction: String,
    pub amount: Decimal,
    pub deal_value: Decimal,
    pub created_at: i64,
}

/// Filters for dealt orders across symbols. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedDealtOrdersRequest {
    pub symbol: Option<String>,
    pub side: Option<Side>,
    /// Page size, capped at 100 with a symbol filter and 20 without.
    pub limit: Option<u32>,
    pub page: Option<u32>,
    /// Lower bound, milliseconds since the epoch.
    pub since: Option<i64>,
    /// Upper bound, milliseconds since the epoch.
    pub before: Option<i64>,
}

impl MergedDealtOrdersRequest {
    /// Effective page size sent to the server.
    pub fn effective_limit(&self) -> u32 {
        let cap = if self.symbol_filter().is_some() {
            MERGED_LIMIT_WITH_SYMBOL
        } else {
            MERGED_LIMIT_ALL_SYMBOLS
        };
        match self.limit {
            Some(limit) if limit > 0 && limit <= cap => limit,
            _ => cap,
        }
    }

    fn symbol_filter(&self) -> Option<String> {
        self.symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
    }

    pub(crate) fn to_spec(&self) -> RequestSpec {
        RequestSpec::get(private::MERGED_DEALT_ORDERS)
            .param_opt("symbol", self.symbol_filter())
            .param_opt("type", self.side.map(|s| s.as_str()))
            .param("limit", self.effective_limit().to_string())
            .param_opt("page", self.page.filter(|p| *p > 0))
            .param_opt("since", self.since.filter(|t| *t > 0))
            .param_opt("before", self.before.filter(|t| *t > 0))
            .authenticated()
    }
}

/// A page of dealt orders across symbols.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MergedDealtOrders {
    pub total: u64,
    pub datas: Vec<MergedDealtOrder>,
    pub limit: u32,
    pub page: u32,
}

/// One dealt order across symbols.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedDealtOrder {
    pub oid: String,
    pub order_oid: String,
    pub coin_type: String,
    pub coin_type_pair: String,
    pub direction: String,
    #[serde(default)]
    pub deal_direction: String,
    pub amount: Decimal,
    pub deal_value: Decimal,
    pub deal_price: Decimal,
    #[serde(default)]
    pub fee: Decimal,
    #[serde(default)]
    pub fee_rate: Decimal,
    pub created_at: i64,
}

// ========== Wallet ==========

/// Request for deposit or withdrawal records of one coin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHistoryRequest {
    pub coin: String,
    pub transfer_type: TransferType,
    pub status: TransferStatus,
    /// Page size; defaults to [`DEFAULT_HISTORY_LIMIT`].
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl AccountHistoryRequest {
    /// Create a request for the first page.
    pub fn new(coin: impl Into<String>, transfer_type: TransferType, status: TransferStatus) -> Self {
        Self {
            coin: coin.into(),
            transfer_type,
            status,
            limit: None,
            page: None,
        }
    }

    pub(crate) fn to_spec(&self) -> Result<RequestSpec, KucoinError> {
        let coin = required_upper("coin", &self.coin)?;
        Ok(RequestSpec::get(private::wallet_records(&coin))
            .param("type", self.transfer_type.as_str())
            .param("status", self.status.as_str())
            .param("limit", history_limit(self.limit).to_string())
            .param_opt("page", self.page.filter(|p| *p > 0))
            .authenticated())
    }
}

/// A page of deposit or withdrawal records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountHistory {
    pub datas: Vec<WalletRecord>,
    pub total: u64,
    pub limit: u32,
    pub page_nos: u32,
    pub curr_page_no: u32,
    pub navigate_page_nos: Vec<u32>,
    pub coin_type: String,
    #[serde(rename = "type")]
    pub transfer_type: Option<serde_json::Value>,
    pub user_oid: String,
    pub status: Option<serde_json::Value>,
    pub first_page: bool,
    pub last_page: bool,
    pub start_row: u64,
}

/// One deposit or withdrawal.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    pub oid: String,
    /// "DEPOSIT" or "WITHDRAW".
    #[serde(rename = "type")]
    pub transfer_type: String,
    pub amount: Decimal,
    #[serde(default)]
    pub fee: Decimal,
    #[serde(default)]
    pub remark: String,
    /// "FINISHED", "CANCEL" or "PENDING".
    pub status: String,
    #[serde(default)]
    pub address: String,
    /// Memo/tag attached to the transfer.
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub user_oid: String,
    pub coin_type: String,
    pub created_at: i64,
    #[serde(default)]
    pub deleted_at: Option<serde_json::Value>,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub outer_wallet_txid: Option<serde_json::Value>,
}

/// Request to withdraw a coin to an external address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalRequest {
    pub coin: String,
    pub amount: Decimal,
    /// Destination address.
    pub address: String,
}

impl WithdrawalRequest {
    /// Create a new withdrawal request.
    pub fn new(coin: impl Into<String>, amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            coin: coin.into(),
            amount,
            address: address.into(),
        }
    }

    pub(crate) fn to_spec(&self) -> Result<RequestSpec, KucoinError> {
        if self.amount <= Decimal::ZERO {
            return Err(KucoinError::InvalidRequest(
                "Withdrawal amount must be positive".to_string(),
            ));
        }
        let coin = required_upper("coin", &self.coin)?;
        Ok(RequestSpec::post(private::withdraw_apply(&coin))
            .param("coin", coin)
            .param("amount", self.amount.normalize().to_string())
            .param("address", required("address", &self.address)?)
            .authenticated())
    }
}

fn history_limit(limit: Option<u32>) -> u32 {
    limit.filter(|l| *l > 0).unwrap_or(DEFAULT_HISTORY_LIMIT)
}

fn required(name: &str, value: &str) -> Result<String, KucoinError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(KucoinError::InvalidRequest(format!("The {name} is required")));
    }
    Ok(value.to_string())
}
