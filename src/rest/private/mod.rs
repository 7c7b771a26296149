//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Calling one without credentials fails with
//! [`KucoinError::CredentialsMissing`] before any network traffic.

mod types;

pub use types::*;

use crate::error::KucoinError;
use crate::rest::KucoinRestClient;
use crate::rest::endpoints::private;
use crate::rest::request::{RequestSpec, required_upper};
use crate::types::Side;

impl KucoinRestClient {
    // ========== Account ==========

    /// Get the account profile.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kucoin_api_client::rest::KucoinRestClient;
    /// use kucoin_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = KucoinRestClient::builder().credentials(credentials).build();
    ///
    ///     let user = client.get_user_info().await?;
    ///     println!("{} ({})", user.name, user.oid);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_user_info(&self) -> Result<UserInfo, KucoinError> {
        self.execute(RequestSpec::get(private::USER_INFO).authenticated())
            .await
    }

    /// Get the balance of one coin.
    pub async fn get_coin_balance(&self, coin: &str) -> Result<CoinBalance, KucoinError> {
        let coin = required_upper("coin", coin)?;
        self.execute(RequestSpec::get(private::coin_balance(&coin)).authenticated())
            .await
    }

    /// Get a page of balances across all coins.
    pub async fn get_coin_balances(
        &self,
        request: Option<&CoinBalancesRequest>,
    ) -> Result<CoinBalances, KucoinError> {
        let spec = request.cloned().unwrap_or_default().to_spec();
        self.execute(spec).await
    }

    /// Get the deposit address of one coin.
    pub async fn get_coin_deposit_address(
        &self,
        coin: &str,
    ) -> Result<CoinDepositAddress, KucoinError> {
        let coin = required_upper("coin", coin)?;
        self.execute(RequestSpec::get(private::wallet_address(&coin)).authenticated())
            .await
    }

    // ========== Orders ==========

    /// List active orders of a symbol as raw arrays, optionally for one side.
    pub async fn list_active_orders(
        &self,
        symbol: &str,
        side: Option<Side>,
    ) -> Result<ActiveOrders, KucoinError> {
        self.execute(active_orders_spec(private::ACTIVE_ORDERS, symbol, side)?)
            .await
    }

    /// List active orders of a symbol as objects, optionally for one side.
    pub async fn list_active_map_orders(
        &self,
        symbol: &str,
        side: Option<Side>,
    ) -> Result<ActiveMapOrders, KucoinError> {
        self.execute(active_orders_spec(private::ACTIVE_MAP_ORDERS, symbol, side)?)
            .await
    }

    /// Place a limit order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kucoin_api_client::rest::KucoinRestClient;
    /// use kucoin_api_client::rest::private::CreateOrderRequest;
    /// use kucoin_api_client::Side;
    /// use rust_decimal::Decimal;
    ///
    /// # async fn example(client: &KucoinRestClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = CreateOrderRequest::new("KCS-BTC", Side::Buy, Decimal::new(12, 5), Decimal::TEN);
    /// let created = client.create_order(&request).await?;
    /// println!("order {}", created.order_oid);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<OrderCreated, KucoinError> {
        self.execute(request.to_spec()?).await
    }

    /// Cancel an open order.
    pub async fn cancel_order(&self, request: &CancelOrderRequest) -> Result<(), KucoinError> {
        self.execute_ack(request.to_spec()?).await
    }

    /// Get details and fills of one order.
    pub async fn get_order_details(
        &self,
        request: &OrderDetailsRequest,
    ) -> Result<OrderDetails, KucoinError> {
        self.execute(request.to_spec()?).await
    }

    /// List dealt orders of one symbol.
    pub async fn list_specific_dealt_orders(
        &self,
        request: &SpecificDealtOrdersRequest,
    ) -> Result<SpecificDealtOrders, KucoinError> {
        self.execute(request.to_spec()?).await
    }

    /// List dealt orders across symbols.
    ///
    /// The page size is capped at 100 when filtering by symbol and 20 otherwise.
    pub async fn list_merged_dealt_orders(
        &self,
        request: Option<&MergedDealtOrdersRequest>,
    ) -> Result<MergedDealtOrders, KucoinError> {
        let spec = request.cloned().unwrap_or_default().to_spec();
        self.execute(spec).await
    }

    // ========== Wallet ==========

    /// List deposit or withdrawal records of one coin.
    pub async fn account_history(
        &self,
        request: &AccountHistoryRequest,
    ) -> Result<AccountHistory, KucoinError> {
        self.execute(request.to_spec()?).await
    }

    /// Apply for a withdrawal.
    pub async fn create_withdrawal(&self, request: &WithdrawalRequest) -> Result<(), KucoinError> {
        self.execute_ack(request.to_spec()?).await
    }

    /// Cancel a pending withdrawal.
    pub async fn cancel_withdrawal(&self, coin: &str, tx_oid: &str) -> Result<(), KucoinError> {
        let coin = required_upper("coin", coin)?;
        let tx_oid = tx_oid.trim();
        if tx_oid.is_empty() {
            return Err(KucoinError::InvalidRequest(
                "The txOid is required".to_string(),
            ));
        }
        let spec = RequestSpec::post(private::withdraw_cancel(&coin))
            .param("txOid", tx_oid)
            .authenticated();
        self.execute_ack(spec).await
    }
}

fn active_orders_spec(
    path: &str,
    symbol: &str,
    side: Option<Side>,
) -> Result<RequestSpec, KucoinError> {
    Ok(RequestSpec::get(path)
        .param("symbol", required_upper("symbol", symbol)?)
        .param_opt("type", side.map(|s| s.as_str()))
        .authenticated())
}
