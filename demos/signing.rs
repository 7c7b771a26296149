//! Example: How a KuCoin request signature is built.
//!
//! Shows the canonical parameter form, the signed payload and the final
//! signature for a request, without touching the network.
//!
//! Run with: cargo run --example signing

use kucoin_api_client::auth::{
    Credentials, MillisNonce, NonceProvider, sign_request, signature_payload,
};
use kucoin_api_client::rest::{API_PREFIX, RequestSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::try_new("demo_key", "demo_secret")?;

    let spec = RequestSpec::post("order")
        .param("type", "BUY")
        .param("price", "1.1")
        .param("amount", "10")
        .param("symbol", "KCS-BTC")
        .authenticated();

    let canonical = spec.canonical_form();
    let url_path = format!("{API_PREFIX}/{}", spec.path());
    let nonce = MillisNonce::new().next_nonce();
    let signature = sign_request(&credentials, &url_path, nonce, &canonical);

    println!("{} {}", spec.method(), url_path);
    println!("canonical form: {canonical}");
    println!("payload:        {}", signature_payload(&url_path, nonce, &canonical));
    println!();
    println!("KC-API-KEY:       {}", credentials.api_key);
    println!("KC-API-NONCE:     {nonce}");
    println!("KC-API-SIGNATURE: {signature}");

    Ok(())
}
