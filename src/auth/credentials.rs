//! KuCoin API key and secret handling.
//!
//! A KuCoin key pair is an API key, sent as the `KC-API-KEY` header, plus a
//! secret that only ever feeds the HMAC signer. The checked constructors
//! ([`Credentials::try_new`], [`StaticCredentials::try_new`] and the
//! [`EnvCredentials`] loaders) reject pairs the exchange could never accept,
//! so a rejected key shows up when the client is set up instead of at the
//! first signed call.

use secrecy::{ExposeSecret, SecretString};

use crate::error::KucoinError;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "KUCOIN_API_KEY";
/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "KUCOIN_API_SECRET";

/// A KuCoin API key and its signing secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key, sent in clear as `KC-API-KEY`
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Wrap a key and secret as given.
    ///
    /// Nothing is checked here. A blank pair is still refused by the client
    /// with [`KucoinError::CredentialsMissing`] before anything is sent.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Build credentials, trimming surrounding whitespace from both parts.
    ///
    /// Fails with [`KucoinError::CredentialsMissing`] when either part is
    /// blank, and with [`KucoinError::InvalidRequest`] when the key cannot be
    /// sent as a header value.
    pub fn try_new(
        api_key: impl AsRef<str>,
        api_secret: impl AsRef<str>,
    ) -> Result<Self, KucoinError> {
        let api_key = api_key.as_ref().trim();
        let api_secret = api_secret.as_ref().trim();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(KucoinError::CredentialsMissing);
        }
        if !api_key.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(KucoinError::InvalidRequest(
                "API key must be printable ASCII without spaces".to_string(),
            ));
        }
        Ok(Self::new(api_key, api_secret))
    }

    /// The secret used as the HMAC key.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Neither the key nor the secret is blank.
    ///
    /// Always true for values built by [`Credentials::try_new`].
    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.expose_secret().trim().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Source of the key pair used to sign private requests.
///
/// The client asks for credentials on every signed call, so an
/// implementation backed by a secrets store can rotate keys in place.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Provider holding one fixed key pair.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Hold a key pair without checking it.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }

    /// Hold a key pair after the checks of [`Credentials::try_new`].
    pub fn try_new(
        api_key: impl AsRef<str>,
        api_secret: impl AsRef<str>,
    ) -> Result<Self, KucoinError> {
        Credentials::try_new(api_key, api_secret).map(Self::from)
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Provider loading the key pair from `KUCOIN_API_KEY` and `KUCOIN_API_SECRET`.
///
/// Variables that are unset, blank or not valid unicode count as missing.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Load from [`API_KEY_VAR`] and [`API_SECRET_VAR`].
    pub fn from_env() -> Result<Self, KucoinError> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Load from custom variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, KucoinError> {
        let api_key = std::env::var(key_var).unwrap_or_default();
        let api_secret = std::env::var(secret_var).unwrap_or_default();
        let credentials = Credentials::try_new(api_key, api_secret)?;
        Ok(Self { credentials })
    }

    /// Like [`EnvCredentials::from_env`], returning `None` instead of an error.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }

    /// Like [`EnvCredentials::from_env_vars`], returning `None` instead of an error.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        Self::from_env_vars(key_var, secret_var).ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
