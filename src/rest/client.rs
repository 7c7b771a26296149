//! KuCoin REST API client implementation.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{CredentialsProvider, MillisNonce, NonceProvider, sign_request};
use crate::error::KucoinError;
use crate::rest::endpoints::{
    API_PREFIX, FORM_CONTENT_TYPE, HEADER_API_KEY, HEADER_API_NONCE, HEADER_API_SIGNATURE,
    KUCOIN_BASE_URL,
};
use crate::rest::request::{RequestSpec, canonical_form, encode_form};
use crate::rest::response::RawResponse;

/// Default time allowed for a whole call, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DUMP_TARGET: &str = "kucoin_api_client::dump";

/// The KuCoin REST API client.
///
/// Every endpoint method builds a [`RequestSpec`] and hands it to
/// [`KucoinRestClient::send`], which signs, dispatches and classifies the call.
///
/// # Example
///
/// ```rust,no_run
/// use kucoin_api_client::rest::KucoinRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = KucoinRestClient::new();
///
///     let coins = client.get_coins().await?;
///     println!("{} coins", coins.len());
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use kucoin_api_client::rest::KucoinRestClient;
/// use kucoin_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = KucoinRestClient::builder()
///         .credentials(credentials)
///         .timeout(Duration::from_secs(10))
///         .build();
///
///     let balance = client.get_coin_balance("KCS").await?;
///     println!("Balance: {:?}", balance);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KucoinRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    timeout: Duration,
    debug: bool,
}

impl KucoinRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`KucoinRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> KucoinRestClientBuilder {
        KucoinRestClientBuilder::new()
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether request/response dumping is enabled.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Enable or disable request/response dumping for this instance.
    ///
    /// Dumps are emitted as `tracing` DEBUG events on the
    /// `kucoin_api_client::dump` target with the signature header redacted.
    pub fn set_debug(&mut self, enable: bool) {
        self.debug = enable;
    }

    /// Sign (when required), execute and classify a single request.
    ///
    /// Returns the body of a 200 response unmodified. Application-level
    /// failures inside that body are left to the caller; see
    /// [`RawResponse::decode`].
    ///
    /// # Errors
    ///
    /// - [`KucoinError::CredentialsMissing`] when the request needs signing but
    ///   the key or secret is absent. No network call is made.
    /// - [`KucoinError::Timeout`] when the call exceeds the configured timeout.
    ///   It carries that timeout, or the time actually spent when the
    ///   underlying `http_client` gave up first on a timeout of its own.
    /// - [`KucoinError::Transport`] on DNS, connection, TLS or body failures.
    /// - [`KucoinError::Http`] when the status is not 200, with the body kept.
    pub async fn send(&self, spec: RequestSpec) -> Result<RawResponse, KucoinError> {
        let (mut url, params) = self.resolve_target(&spec)?;
        let method = spec.method();
        let encoded = encode_form(&params)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let body = if method.params_in_query() {
            url.set_query((!encoded.is_empty()).then_some(encoded.as_str()));
            None
        } else {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            Some(encoded)
        };

        if spec.auth_needed() {
            self.attach_auth(&mut headers, url.path(), &canonical_form(&params))?;
        }

        if self.debug {
            dump_request(method.as_str(), &url, &headers, body.as_deref());
        }

        let mut request = self
            .http_client
            .request(method.to_reqwest(), url.clone())
            .headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let debug = self.debug;
        let exchange = async move {
            let response = request.send().await?;
            let status = response.status().as_u16();
            if debug {
                dump_response_head(status, response.headers());
            }
            let body = response.bytes().await?;
            Ok::<_, KucoinError>(RawResponse::new(status, body.to_vec()))
        };

        let started = Instant::now();
        let raw = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(KucoinError::Transport(e))) if is_transport_timeout(&e) => {
                // A custom http_client may carry a shorter timeout of its own.
                let elapsed = started.elapsed();
                tracing::warn!(%url, ?elapsed, "request timed out in transport");
                return Err(KucoinError::Timeout(elapsed));
            }
            Ok(Err(e)) => {
                tracing::warn!(%url, error = %e, "request failed");
                return Err(e);
            }
            Err(_) => {
                tracing::warn!(%url, timeout = ?self.timeout, "request timed out");
                return Err(KucoinError::Timeout(self.timeout));
            }
        };

        if self.debug {
            tracing::debug!(
                target: DUMP_TARGET,
                body = %String::from_utf8_lossy(raw.body()),
                "response body"
            );
        }

        if raw.status() != 200 {
            tracing::warn!(%url, status = raw.status(), "non-200 response");
            return Err(KucoinError::Http {
                status: raw.status(),
                body: raw.into_body(),
            });
        }

        tracing::trace!(%url, bytes = raw.body().len(), "request completed");
        Ok(raw)
    }

    /// Dispatch a request and decode the `data` payload of its envelope.
    pub(crate) async fn execute<T>(&self, spec: RequestSpec) -> Result<T, KucoinError>
    where
        T: DeserializeOwned,
    {
        self.send(spec).await?.decode()
    }

    /// Dispatch a request whose payload carries nothing of interest.
    pub(crate) async fn execute_ack(&self, spec: RequestSpec) -> Result<(), KucoinError> {
        self.send(spec).await?.acknowledge()
    }

    /// Turn the request target into an absolute URL and the merged parameter set.
    ///
    /// Query pairs already present on the target are folded into the
    /// parameters, with explicit parameters taking precedence.
    fn resolve_target(
        &self,
        spec: &RequestSpec,
    ) -> Result<(Url, BTreeMap<String, String>), KucoinError> {
        let path = spec.path();
        let raw = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}{}/{}",
                self.base_url.trim_end_matches('/'),
                API_PREFIX,
                path.trim_start_matches('/')
            )
        };

        let mut url = Url::parse(&raw)?;
        let mut params: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        params.extend(
            spec.param_map()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        url.set_query(None);
        url.set_fragment(None);

        Ok((url, params))
    }

    fn attach_auth(
        &self,
        headers: &mut HeaderMap,
        url_path: &str,
        canonical: &str,
    ) -> Result<(), KucoinError> {
        let creds = self
            .credentials
            .as_ref()
            .map(|provider| provider.get_credentials())
            .filter(|creds| creds.is_complete())
            .ok_or(KucoinError::CredentialsMissing)?;

        let nonce = self.nonce_provider.next_nonce();
        let signature = sign_request(creds, url_path, nonce, canonical);

        let api_key = HeaderValue::from_str(&creds.api_key).map_err(|_| {
            KucoinError::InvalidRequest("API key contains invalid header characters".to_string())
        })?;
        headers.insert(HeaderName::from_static(HEADER_API_KEY), api_key);
        headers.insert(HeaderName::from_static(HEADER_API_NONCE), HeaderValue::from(nonce));
        headers.insert(
            HeaderName::from_static(HEADER_API_SIGNATURE),
            HeaderValue::from_str(&signature).map_err(|_| {
                KucoinError::InvalidRequest("Signature is not a valid header value".to_string())
            })?,
        );
        Ok(())
    }
}

fn is_transport_timeout(err: &reqwest_middleware::Error) -> bool {
    match err {
        reqwest_middleware::Error::Reqwest(e) => e.is_timeout(),
        reqwest_middleware::Error::Middleware(_) => false,
    }
}

fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if name.as_str() == HEADER_API_SIGNATURE {
                "[REDACTED]".to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.to_string(), shown)
        })
        .collect()
}

fn dump_request(method: &str, url: &Url, headers: &HeaderMap, body: Option<&str>) {
    tracing::debug!(
        target: DUMP_TARGET,
        %method,
        %url,
        headers = ?redacted_headers(headers),
        body = body.unwrap_or_default(),
        "outbound request"
    );
}

fn dump_response_head(status: u16, headers: &HeaderMap) {
    tracing::debug!(
        target: DUMP_TARGET,
        status,
        headers = ?redacted_headers(headers),
        "inbound response"
    );
}

impl Default for KucoinRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KucoinRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KucoinRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}

/// Builder for [`KucoinRestClient`].
pub struct KucoinRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    timeout: Duration,
    debug: bool,
}

impl KucoinRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: KUCOIN_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            http_client: None,
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest` client (proxies, TLS roots, pools).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the time allowed for a whole call (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable request/response dumping.
    pub fn debug(mut self, enable: bool) -> Self {
        self.debug = enable;
        self
    }

    /// Build the client.
    pub fn build(self) -> KucoinRestClient {
        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("kucoin-api-client/{}", env!("CARGO_PKG_VERSION")));
                let header_value = HeaderValue::from_str(&user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static("kucoin-api-client"));
                headers.insert(USER_AGENT, header_value);

                reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .unwrap_or_else(|_| reqwest::Client::new())
            }
        };

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(MillisNonce::new()));

        KucoinRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
            timeout: self.timeout,
            debug: self.debug,
        }
    }
}

impl Default for KucoinRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
