//! KuCoin REST API client.
//!
//! Provides signed dispatch of v1 REST calls plus typed wrappers for the
//! public market and private account/order/wallet endpoints.
//!
//! # Trait-based API
//!
//! The [`KucoinClient`] trait abstracts all endpoint operations, so callers
//! can swap in a mock or wrap the client:
//!
//! ```rust,ignore
//! use kucoin_api_client::rest::{KucoinClient, KucoinRestClient};
//!
//! async fn use_client<C: KucoinClient>(client: &C) -> Result<(), kucoin_api_client::KucoinError> {
//!     let coins = client.get_coins().await?;
//!     println!("{} coins", coins.len());
//!     Ok(())
//! }
//! ```
//!
//! # Raw dispatch
//!
//! Endpoints without a typed wrapper can be called through
//! [`KucoinRestClient::send`] with a hand-built [`RequestSpec`].

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod request;
mod response;
mod traits;

pub use client::{DEFAULT_TIMEOUT, KucoinRestClient, KucoinRestClientBuilder};
pub use endpoints::*;
pub use request::{HttpMethod, RequestSpec, canonical_form};
pub use response::{ApiResponse, RawResponse};
pub use traits::KucoinClient;
