//! KuCoin REST API endpoint constants.
//!
//! Resources are relative to [`API_PREFIX`]; the dispatcher joins them as
//! `{base_url}{API_PREFIX}/{resource}`.

/// Base URL for the KuCoin REST API.
pub const KUCOIN_BASE_URL: &str = "https://api.kucoin.com";

/// Version prefix prepended to every relative resource.
pub const API_PREFIX: &str = "/v1";

// Header names are case-insensitive on the wire. They are kept in lowercase
// because `HeaderName::from_static` only accepts lowercase names.

/// Header carrying the API key (`KC-API-KEY`).
pub const HEADER_API_KEY: &str = "kc-api-key";
/// Header carrying the request nonce in epoch milliseconds (`KC-API-NONCE`).
pub const HEADER_API_NONCE: &str = "kc-api-nonce";
/// Header carrying the hex HMAC-SHA256 signature (`KC-API-SIGNATURE`).
pub const HEADER_API_SIGNATURE: &str = "kc-api-signature";

/// Content type of creation/removal request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

/// Public endpoints (no authentication required).
pub mod public {
    /// List all trading symbols with ticker data.
    pub const SYMBOLS: &str = "market/open/symbols";
    /// Ticker for a single symbol.
    pub const TICK: &str = "open/tick";
    /// List all coins.
    pub const COINS: &str = "market/open/coins";
    /// Details for a single coin.
    pub const COIN_INFO: &str = "market/open/coin-info";
    /// Order book for a symbol.
    pub const ORDERS_BOOK: &str = "open/orders";
}

/// Private endpoints (authentication required).
pub mod private {
    /// Account profile.
    pub const USER_INFO: &str = "user/info";
    /// Paged balances of all coins.
    pub const BALANCES: &str = "account/balances";
    /// Active orders as raw arrays.
    pub const ACTIVE_ORDERS: &str = "order/active";
    /// Active orders as objects.
    pub const ACTIVE_MAP_ORDERS: &str = "order/active-map";
    /// Place an order.
    pub const CREATE_ORDER: &str = "order";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "cancel-order";
    /// Details and fills of one order.
    pub const ORDER_DETAILS: &str = "order/detail";
    /// Dealt orders for one symbol.
    pub const DEAL_ORDERS: &str = "deal-orders";
    /// Dealt orders across symbols.
    pub const MERGED_DEALT_ORDERS: &str = "order/dealt";

    /// Balance of one coin.
    pub fn coin_balance(coin: &str) -> String {
        format!("account/{coin}/balance")
    }

    /// Deposit address of one coin.
    pub fn wallet_address(coin: &str) -> String {
        format!("account/{coin}/wallet/address")
    }

    /// Deposit and withdrawal records of one coin.
    pub fn wallet_records(coin: &str) -> String {
        format!("account/{coin}/wallet/records")
    }

    /// Apply for a withdrawal.
    pub fn withdraw_apply(coin: &str) -> String {
        format!("account/{coin}/withdraw/apply")
    }

    /// Cancel a pending withdrawal.
    pub fn withdraw_cancel(coin: &str) -> String {
        format!("account/{coin}/withdraw/cancel")
    }
}
