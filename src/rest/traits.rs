//! Trait definition for the KuCoin REST API client.
//!
//! [`KucoinClient`] abstracts every endpoint operation so code can be written
//! against a mock in tests or against a wrapper that adds behavior around
//! [`KucoinRestClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use kucoin_api_client::rest::{KucoinClient, KucoinRestClient};
//!
//! async fn show_balance<C: KucoinClient>(client: &C) -> Result<(), kucoin_api_client::KucoinError> {
//!     let balance = client.get_coin_balance("KCS").await?;
//!     println!("{} available", balance.balance);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::KucoinError;
use crate::rest::KucoinRestClient;
use crate::rest::private::{
    AccountHistory, AccountHistoryRequest, ActiveMapOrders, ActiveOrders, CancelOrderRequest,
    CoinBalance, CoinBalances, CoinBalancesRequest, CoinDepositAddress, CreateOrderRequest,
    MergedDealtOrders, MergedDealtOrdersRequest, OrderCreated, OrderDetails, OrderDetailsRequest,
    SpecificDealtOrders, SpecificDealtOrdersRequest, UserInfo, WithdrawalRequest,
};
use crate::rest::public::{Coin, OrdersBook, OrdersBookRequest, Symbol};
use crate::types::Side;

/// Trait defining all KuCoin REST API operations.
///
/// All methods are async and return `Result<T, KucoinError>`.
pub trait KucoinClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get all open trading symbols.
    fn get_symbols(&self) -> impl Future<Output = Result<Vec<Symbol>, KucoinError>> + Send;

    /// Get the ticker of one symbol.
    fn get_symbol(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Symbol, KucoinError>> + Send;

    /// Get all coins.
    fn get_coins(&self) -> impl Future<Output = Result<Vec<Coin>, KucoinError>> + Send;

    /// Get one coin.
    fn get_coin(&self, coin: &str) -> impl Future<Output = Result<Coin, KucoinError>> + Send;

    /// Get the order book of a symbol.
    fn get_orders_book(
        &self,
        request: &OrdersBookRequest,
    ) -> impl Future<Output = Result<OrdersBook, KucoinError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get the account profile.
    fn get_user_info(&self) -> impl Future<Output = Result<UserInfo, KucoinError>> + Send;

    /// Get the balance of one coin.
    fn get_coin_balance(
        &self,
        coin: &str,
    ) -> impl Future<Output = Result<CoinBalance, KucoinError>> + Send;

    /// Get a page of balances.
    fn get_coin_balances(
        &self,
        request: Option<&CoinBalancesRequest>,
    ) -> impl Future<Output = Result<CoinBalances, KucoinError>> + Send;

    /// Get the deposit address of one coin.
    fn get_coin_deposit_address(
        &self,
        coin: &str,
    ) -> impl Future<Output = Result<CoinDepositAddress, KucoinError>> + Send;

    // ========== Private Endpoints - Orders ==========

    /// List active orders as raw arrays.
    fn list_active_orders(
        &self,
        symbol: &str,
        side: Option<Side>,
    ) -> impl Future<Output = Result<ActiveOrders, KucoinError>> + Send;

    /// List active orders as objects.
    fn list_active_map_orders(
        &self,
        symbol: &str,
        side: Option<Side>,
    ) -> impl Future<Output = Result<ActiveMapOrders, KucoinError>> + Send;

    /// Place a limit order.
    fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> impl Future<Output = Result<OrderCreated, KucoinError>> + Send;

    /// Cancel an order.
    fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> impl Future<Output = Result<(), KucoinError>> + Send;

    /// Get details and fills of one order.
    fn get_order_details(
        &self,
        request: &OrderDetailsRequest,
    ) -> impl Future<Output = Result<OrderDetails, KucoinError>> + Send;

    /// List dealt orders of one symbol.
    fn list_specific_dealt_orders(
        &self,
        request: &SpecificDealtOrdersRequest,
    ) -> impl Future<Output = Result<SpecificDealtOrders, KucoinError>> + Send;

    /// List dealt orders across symbols.
    fn list_merged_dealt_orders(
        &self,
        request: Option<&MergedDealtOrdersRequest>,
    ) -> impl Future<Output = Result<MergedDealtOrders, KucoinError>> + Send;

    // ========== Private Endpoints - Wallet ==========

    /// List deposit or withdrawal records.
    fn account_history(
        &self,
        request: &AccountHistoryRequest,
    ) -> impl Future<Output = Result<AccountHistory, KucoinError>> + Send;

    /// Apply for a withdrawal.
    fn create_withdrawal(
        &self,
        request: &WithdrawalRequest,
    ) -> impl Future<Output = Result<(), KucoinError>> + Send;

    /// Cancel a pending withdrawal.
    fn cancel_withdrawal(
        &self,
        coin: &str,
        tx_oid: &str,
    ) -> impl Future<Output = Result<(), KucoinError>> + Send;
}

impl KucoinClient for KucoinRestClient {
    // ========== Public Endpoints ==========

    async fn get_symbols(&self) -> Result<Vec<Symbol>, KucoinError> {
        KucoinRestClient::get_symbols(self).await
    }

    async fn get_symbol(&self, symbol: &str) -> Result<Symbol, KucoinError> {
        KucoinRestClient::get_symbol(self, symbol).await
    }

    async fn get_coins(&self) -> Result<Vec<Coin>, KucoinError> {
        KucoinRestClient::get_coins(self).await
    }

    async fn get_coin(&self, coin: &str) -> Result<Coin, KucoinError> {
        KucoinRestClient::get_coin(self, coin).await
    }

    async fn get_orders_book(&self, request: &OrdersBookRequest) -> Result<OrdersBook, KucoinError> {
        KucoinRestClient::get_orders_book(self, request).await
    }

    // ========== Private Endpoints - Account ==========

    async fn get_user_info(&self) -> Result<UserInfo, KucoinError> {
        KucoinRestClient::get_user_info(self).await
    }

    async fn get_coin_balance(&self, coin: &str) -> Result<CoinBalance, KucoinError> {
        KucoinRestClient::get_coin_balance(self, coin).await
    }

    async fn get_coin_balances(
        &self,
        request: Option<&CoinBalancesRequest>,
    ) -> Result<CoinBalances, KucoinError> {
        KucoinRestClient::get_coin_balances(self, request).await
    }

    async fn get_coin_deposit_address(&self, coin: &str) -> Result<CoinDepositAddress, KucoinError> {
        KucoinRestClient::get_coin_deposit_address(self, coin).await
    }

    // ========== Private Endpoints - Orders ==========

    async fn list_active_orders(
        &self,
        symbol: &str,
        side: Option<Side>,
    ) -> Result<ActiveOrders, KucoinError> {
        KucoinRestClient::list_active_orders(self, symbol, side).await
    }

    async fn list_active_map_orders(
        &self,
        symbol: &str,
        side: Option<Side>,
    ) -> Result<ActiveMapOrders, KucoinError> {
        KucoinRestClient::list_active_map_orders(self, symbol, side).await
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<OrderCreated, KucoinError> {
        KucoinRestClient::create_order(self, request).await
    }

    async fn cancel_order(&self, request: &CancelOrderRequest) -> Result<(), KucoinError> {
        KucoinRestClient::cancel_order(self, request).await
    }

    async fn get_order_details(
        &self,
        request: &OrderDetailsRequest,
    ) -> Result<OrderDetails, KucoinError> {
        KucoinRestClient::get_order_details(self, request).await
    }

    async fn list_specific_dealt_orders(
        &self,
        request: &SpecificDealtOrdersRequest,
    ) -> Result<SpecificDealtOrders, KucoinError> {
        KucoinRestClient::list_specific_dealt_orders(self, request).await
    }

    async fn list_merged_dealt_orders(
        &self,
        request: Option<&MergedDealtOrdersRequest>,
    ) -> Result<MergedDealtOrders, KucoinError> {
        KucoinRestClient::list_merged_dealt_orders(self, request).await
    }

    // ========== Private Endpoints - Wallet ==========

    async fn account_history(
        &self,
        request: &AccountHistoryRequest,
    ) -> Result<AccountHistory, KucoinError> {
        KucoinRestClient::account_history(self, request).await
    }

    async fn create_withdrawal(&self, request: &WithdrawalRequest) -> Result<(), KucoinError> {
        KucoinRestClient::create_withdrawal(self, request).await
    }

    async fn cancel_withdrawal(&self, coin: &str, tx_oid: &str) -> Result<(), KucoinError> {
        KucoinRestClient::cancel_withdrawal(self, coin, tx_oid).await
    }
}
