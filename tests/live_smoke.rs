use std::sync::Arc;

use kucoin_api_client::auth::EnvCredentials;
use kucoin_api_client::rest::KucoinRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("KUCOIN_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = KucoinRestClient::new();
    let coins = client.get_coins().await?;
    assert!(!coins.is_empty());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = KucoinRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let user = client.get_user_info().await?;
    assert!(!user.oid.is_empty());
    let _balance = client.get_coin_balance("KCS").await?;

    Ok(())
}
