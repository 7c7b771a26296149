//! Authentication module for KuCoin API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Millisecond nonce generation for replay protection
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_VAR, API_SECRET_VAR, Credentials, CredentialsProvider, EnvCredentials,
    StaticCredentials,
};
pub use nonce::{MillisNonce, NonceProvider, WallClockNonce};
pub use signature::{sign, sign_request, signature_payload};
