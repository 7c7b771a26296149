//! Outbound request description and canonical parameter form.

use std::collections::BTreeMap;

use crate::error::KucoinError;

/// HTTP verb of a KuCoin request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieval; parameters travel in the query string.
    Get,
    /// Creation; parameters travel in a form-encoded body.
    Post,
    /// Creation/replacement; parameters travel in a form-encoded body.
    Put,
    /// Removal; parameters travel in a form-encoded body.
    Delete,
}

impl HttpMethod {
    /// Whether parameters are sent as a URL query string rather than a body.
    pub fn params_in_query(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }

    /// Upper-case verb name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outbound call: verb, target, parameters and whether to sign it.
///
/// The target is either a resource relative to the versioned API prefix
/// (e.g. `"user/info"`) or an absolute `http(s)://` URL used verbatim.
///
/// ```rust
/// use kucoin_api_client::rest::RequestSpec;
///
/// let spec = RequestSpec::post("order")
///     .param("type", "BUY")
///     .param("price", "1.1")
///     .param("amount", "10")
///     .authenticated();
///
/// assert_eq!(spec.canonical_form(), "amount=10&price=1.1&type=BUY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    method: HttpMethod,
    path: String,
    params: BTreeMap<String, String>,
    auth_needed: bool,
}

impl RequestSpec {
    /// Create an unauthenticated request with no parameters.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: BTreeMap::new(),
            auth_needed: false,
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Create a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Create a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Set a parameter, replacing any previous value for the same key.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set a parameter only when a value is present.
    pub fn param_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v.to_string()),
            None => self,
        }
    }

    /// Set many parameters at once.
    pub fn params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Mark the request as requiring a signature.
    pub fn authenticated(mut self) -> Self {
        self.auth_needed = true;
        self
    }

    /// The HTTP verb.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The relative resource or absolute URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters, sorted by key.
    pub fn param_map(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Whether the request must be signed.
    pub fn auth_needed(&self) -> bool {
        self.auth_needed
    }

    /// The signed representation of this request's parameters.
    pub fn canonical_form(&self) -> String {
        canonical_form(&self.params)
    }
}

/// Join parameters as `key=value` pairs with `&`, keys in ascending byte order.
///
/// No percent-encoding is applied: this is the exact string the server
/// recomputes from the decoded parameters before verifying the signature.
pub fn canonical_form(params: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in params {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out
}

/// Form-urlencode the same sorted pairs for the wire.
///
/// Identical to [`canonical_form`] whenever keys and values are URL-safe.
pub(crate) fn encode_form(params: &BTreeMap<String, String>) -> Result<String, KucoinError> {
    serde_urlencoded::to_string(params).map_err(|e| KucoinError::InvalidRequest(e.to_string()))
}

/// Upper-case a required argument, rejecting blanks.
pub(crate) fn required_upper(name: &str, value: &str) -> Result<String, KucoinError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(KucoinError::InvalidRequest(format!("The {name} is required")));
    }
    Ok(value.to_uppercase())
}
