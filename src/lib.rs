//! # KuCoin Client
//!
//! An async Rust client library for the KuCoin v1 REST API.
//!
//! ## Features
//!
//! - Signed requests (HMAC-SHA256 over a canonical parameter form)
//! - Bounded request timeouts with distinct timeout errors
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kucoin_api_client::rest::KucoinRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KucoinRestClient::new();
//!     let symbols = client.get_symbols().await?;
//!     println!("{} symbols listed", symbols.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::KucoinError;
pub use types::common::{Side, TransferStatus, TransferType};

/// Result type alias using KucoinError
pub type Result<T> = std::result::Result<T, KucoinError>;
