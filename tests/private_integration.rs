use std::sync::Arc;

use rust_decimal::Decimal;
use wiremock::matchers::{body_string, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kucoin_api_client::auth::StaticCredentials;
use kucoin_api_client::rest::KucoinRestClient;
use kucoin_api_client::rest::private::{
    AccountHistoryRequest, CancelOrderRequest, CoinBalancesRequest, CreateOrderRequest,
    MergedDealtOrdersRequest, OrderDetailsRequest, SpecificDealtOrdersRequest, WithdrawalRequest,
};
use kucoin_api_client::{KucoinError, Side, TransferStatus, TransferType};

fn build_client(server: &MockServer) -> KucoinRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", "test_secret"));
    KucoinRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
}

fn wrap(data: &str) -> String {
    format!(
        r#"{{"success":true,"code":"OK","msg":"Operation succeeded.","timestamp":1700000000000,"data":{data}}}"#
    )
}

fn json_response(data: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(wrap(data), "application/json")
}

#[tokio::test]
async fn test_get_user_info() {
    let server = MockServer::start().await;
    let data = r#"{
        "referrer_code": "QD6XYV",
        "photoCredentialValidated": false,
        "videoValidated": false,
        "language": "en_US",
        "currency": "USD",
        "oid": "5969ddc96732d54312eb960e",
        "baseFeeRate": 0.001,
        "hasCredential": false,
        "credentialNumber": "",
        "phoneValidated": true,
        "phone": "",
        "credentialValidated": false,
        "googleTwoFaBinding": true,
        "nickname": null,
        "name": "trader",
        "hasTradePassword": true,
        "emailValidated": true,
        "email": "trader@example.com",
        "loginRecord": {
            "last": { "ip": "10.0.0.1", "context": null, "time": 1699999000000 },
            "current": { "ip": "10.0.0.2", "context": null, "time": 1700000000000 }
        }
    }"#;

    Mock::given(method("GET"))
        .and(path("/v1/user/info"))
        .and(header_exists("KC-API-KEY"))
        .and(header_exists("KC-API-NONCE"))
        .and(header_exists("KC-API-SIGNATURE"))
        .respond_with(json_response(data))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let user = client.get_user_info().await.unwrap();

    assert_eq!(user.oid, "5969ddc96732d54312eb960e");
    assert_eq!(user.referrer_code, "QD6XYV");
    assert_eq!(user.base_fee_rate, "0.001".parse::<Decimal>().unwrap());
    assert!(user.google_two_fa_binding);
    let record = user.login_record.unwrap();
    assert_eq!(record.current.unwrap().ip, "10.0.0.2");
}

#[tokio::test]
async fn test_get_coin_balance_and_balances() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/KCS/balance"))
        .respond_with(json_response(
            r#"{"coinType":"KCS","balance":1234.5678,"freezeBalance":10}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/account/balances"))
        .and(query_param("limit", "2"))
        .and(query_param("page", "1"))
        .respond_with(json_response(
            r#"[{"coinType":"KCS","balance":1,"freezeBalance":0},{"coinType":"BTC","balance":0.5,"freezeBalance":0.1}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balance = client.get_coin_balance("kcs").await.unwrap();
    assert_eq!(balance.coin_type, "KCS");
    assert_eq!(balance.balance, "1234.5678".parse::<Decimal>().unwrap());

    let request = CoinBalancesRequest {
        limit: Some(2),
        page: Some(1),
    };
    let balances = client.get_coin_balances(Some(&request)).await.unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[1].freeze_balance, "0.1".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_get_coin_deposit_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/BTC/wallet/address"))
        .respond_with(json_response(
            r#"{
                "oid": "598aeb627da3355fa3e851ca",
                "address": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
                "context": null,
                "userOid": "5969ddc96732d54312eb960e",
                "coinType": "BTC",
                "createdAt": 1502276446000,
                "deletedAt": null,
                "updatedAt": 1502276446000,
                "lastReceivedAt": 1502276446000
            }"#,
        ))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let address = client.get_coin_deposit_address("btc").await.unwrap();
    assert_eq!(address.address, "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
    assert_eq!(address.last_received_at, 1502276446000);
}

#[tokio::test]
async fn test_list_active_orders() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/order/active"))
        .and(query_param("symbol", "KCS-BTC"))
        .and(query_param("type", "SELL"))
        .respond_with(json_response(
            r#"{"SELL":[[1508219688000,"SELL",0.1,100,0,"59e59b279bd8d31d093d956e"]],"BUY":[]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client
        .list_active_orders("KCS-BTC", Some(Side::Sell))
        .await
        .unwrap();
    assert_eq!(orders.sell.len(), 1);
    assert_eq!(orders.sell[0][5], "59e59b279bd8d31d093d956e");
    assert!(orders.buy.is_empty());
}

#[tokio::test]
async fn test_list_active_map_orders_without_side() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/order/active-map"))
        .and(query_param("symbol", "KCS-BTC"))
        .respond_with(json_response(
            r#"{
                "SELL": [],
                "BUY": [{
                    "oid": "59e59b279bd8d31d093d956f",
                    "type": "BUY",
                    "userOid": null,
                    "coinType": "KCS",
                    "coinTypePair": "BTC",
                    "direction": "BUY",
                    "price": 0.0001,
                    "dealAmount": 5,
                    "pendingAmount": 95,
                    "createdAt": 1508219688000,
                    "updatedAt": 1508219688000
                }]
            }"#,
        ))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client.list_active_map_orders("kcs-btc", None).await.unwrap();
    assert_eq!(orders.buy.len(), 1);
    assert_eq!(orders.buy[0].side, Side::Buy);
    assert_eq!(orders.buy[0].deal_amount, Decimal::from(5));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("symbol=KCS-BTC"));
}

#[tokio::test]
async fn test_create_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/order"))
        .and(body_string(
            "amount=10.00000000&price=0.00012000&symbol=KCS-BTC&type=BUY",
        ))
        .respond_with(json_response(r#"{"orderOid":"596186ad07015679730ffa02"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CreateOrderRequest::new(
        "kcs-btc",
        Side::Buy,
        "0.00012".parse().unwrap(),
        Decimal::from(10),
    );
    let created = client.create_order(&request).await.unwrap();
    assert_eq!(created.order_oid, "596186ad07015679730ffa02");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_create_order_rounds_price_and_amount() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/order"))
        .and(body_string(
            "amount=2.00000000&price=0.12345679&symbol=KCS-BTC&type=BUY",
        ))
        .respond_with(json_response(r#"{"orderOid":"596186ad07015679730ffa03"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CreateOrderRequest::new(
        "kcs-btc",
        Side::Buy,
        "0.123456789".parse().unwrap(),
        "1.999999999".parse().unwrap(),
    );
    let created = client.create_order(&request).await.unwrap();
    assert_eq!(created.order_oid, "596186ad07015679730ffa03");
}

#[tokio::test]
async fn test_create_order_below_precision_fails_locally() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/order"))
        .respond_with(json_response("{}"))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CreateOrderRequest::new(
        "KCS-BTC",
        Side::Sell,
        "0.000000004".parse().unwrap(),
        Decimal::ONE,
    );
    let err = client.create_order(&request).await.unwrap_err();
    assert!(matches!(err, KucoinError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_cancel_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/cancel-order"))
        .and(body_string(
            "orderOid=596186ad07015679730ffa02&symbol=KCS-BTC&type=BUY",
        ))
        .respond_with(json_response("null"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CancelOrderRequest::new("KCS-BTC", "596186ad07015679730ffa02", Side::Buy);
    client.cancel_order(&request).await.unwrap();
}

#[tokio::test]
async fn test_cancel_order_rejected_by_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/cancel-order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "code": "ERROR",
            "msg": "Order not found"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CancelOrderRequest::new("KCS-BTC", "missing", Side::Sell);
    match client.cancel_order(&request).await {
        Err(KucoinError::Api(api)) => assert_eq!(api.message, "Order not found"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_order_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/order/detail"))
        .and(query_param("symbol", "KCS-BTC"))
        .and(query_param("type", "SELL"))
        .and(query_param("orderOid", "59e41cd69bd8d374c9956c75"))
        .and(query_param("limit", "10"))
        .respond_with(json_response(
            r#"{
                "coinType": "KCS",
                "dealValueTotal": 0.00938022,
                "dealPriceAverage": 0.0009,
                "feeTotal": 0.00000938,
                "userOid": "5969ddc96732d54312eb960e",
                "dealAmount": 10.4224,
                "dealOrders": {
                    "total": 1,
                    "firstPage": true,
                    "lastPage": true,
                    "datas": [{
                        "amount": 10.4224,
                        "dealValue": 0.00938022,
                        "fee": 0.00000938,
                        "dealPrice": 0.0009,
                        "feeRate": 0.001
                    }],
                    "currPageNo": 1,
                    "limit": 10,
                    "pageNos": 1
                },
                "coinTypePair": "BTC",
                "orderPrice": 0.0009,
                "type": "SELL",
                "orderOid": "59e41cd69bd8d374c9956c75",
                "pendingAmount": 0
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let mut request = OrderDetailsRequest::new("KCS-BTC", Side::Sell, "59e41cd69bd8d374c9956c75");
    request.limit = Some(10);
    let details = client.get_order_details(&request).await.unwrap();

    assert_eq!(details.side, Side::Sell);
    assert_eq!(details.fee_total, "0.00000938".parse::<Decimal>().unwrap());
    assert_eq!(details.deal_orders.total, 1);
    assert_eq!(details.deal_orders.datas[0].amount, "10.4224".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_account_history_decodes_data_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/KCS/wallet/records"))
        .and(query_param("type", "WITHDRAW"))
        .and(query_param("status", "PENDING"))
        .and(query_param("limit", "1000"))
        .respond_with(json_response(
            r#"{
                "datas": [{
                    "fee": 0.5,
                    "oid": "5a0a6d6c9bd8d3135d7e3e4b",
                    "type": "WITHDRAW",
                    "amount": 20,
                    "remark": "",
                    "status": "PENDING",
                    "address": "0xabc",
                    "context": "",
                    "userOid": "5969ddc96732d54312eb960e",
                    "coinType": "KCS",
                    "createdAt": 1510632812000,
                    "deletedAt": null,
                    "updatedAt": 1510632812000,
                    "outerWalletTxid": null
                }],
                "total": 1,
                "limit": 1000,
                "pageNos": 1,
                "currPageNo": 1,
                "navigatePageNos": [1],
                "coinType": "KCS",
                "type": "WITHDRAW",
                "userOid": "5969ddc96732d54312eb960e",
                "status": "PENDING",
                "firstPage": true,
                "lastPage": true,
                "startRow": 0
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = AccountHistoryRequest::new("kcs", TransferType::Withdraw, TransferStatus::Pending);
    let history = client.account_history(&request).await.unwrap();

    assert_eq!(history.total, 1);
    assert_eq!(history.datas[0].transfer_type, "WITHDRAW");
    assert_eq!(history.datas[0].fee, "0.5".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_list_specific_dealt_orders() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/deal-orders"))
        .and(query_param("symbol", "KCS-BTC"))
        .and(query_param("type", "BUY"))
        .and(query_param("limit", "1000"))
        .and(query_param("page", "2"))
        .respond_with(json_response(
            r#"{
                "datas": [{
                    "oid": "5a1c2d3e",
                    "dealPrice": 0.0001,
                    "orderOid": "5a1c2d3f",
                    "direction": "BUY",
                    "amount": 3,
                    "dealValue": 0.0003,
                    "createdAt": 1511766000000
                }],
                "total": 1,
                "limit": 1000,
                "pageNos": 2,
                "currPageNo": 2,
                "navigatePageNos": [1, 2],
                "userOid": "5969ddc96732d54312eb960e",
                "direction": null,
                "startRow": 1000,
                "firstPage": false,
                "lastPage": true
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let mut request = SpecificDealtOrdersRequest::new("KCS-BTC", Side::Buy);
    request.page = Some(2);
    let orders = client.list_specific_dealt_orders(&request).await.unwrap();

    assert_eq!(orders.datas.len(), 1);
    assert_eq!(orders.curr_page_no, 2);
    assert_eq!(orders.datas[0].deal_value, "0.0003".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_list_merged_dealt_orders_caps_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/order/dealt"))
        .and(query_param("limit", "20"))
        .respond_with(json_response(
            r#"{
                "total": 1,
                "datas": [{
                    "createdAt": 1511766000000,
                    "amount": 1,
                    "dealValue": 0.0001,
                    "dealPrice": 0.0001,
                    "fee": 0.001,
                    "feeRate": 0.001,
                    "oid": "5a1c2d40",
                    "orderOid": "5a1c2d41",
                    "coinType": "KCS",
                    "coinTypePair": "BTC",
                    "direction": "SELL",
                    "dealDirection": "SELL"
                }],
                "limit": 20,
                "page": 1
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = MergedDealtOrdersRequest {
        limit: Some(50),
        ..Default::default()
    };
    let orders = client.list_merged_dealt_orders(Some(&request)).await.unwrap();

    assert_eq!(orders.limit, 20);
    assert_eq!(orders.datas[0].coin_type, "KCS");
}

#[tokio::test]
async fn test_create_and_cancel_withdrawal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/account/BTC/withdraw/apply"))
        .and(body_string(
            "address=1BoatSLRHtKNngkdXEeobR76b53LETtpyT&amount=0.25&coin=BTC",
        ))
        .respond_with(json_response("{}"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/account/BTC/withdraw/cancel"))
        .and(body_string("txOid=5a1c2d42"))
        .respond_with(json_response("null"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = WithdrawalRequest::new(
        "btc",
        "0.25".parse().unwrap(),
        "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
    );
    client.create_withdrawal(&request).await.unwrap();
    client.cancel_withdrawal("BTC", "5a1c2d42").await.unwrap();
}

#[tokio::test]
async fn test_blank_arguments_fail_locally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert!(matches!(
        client.get_coin_balance("").await,
        Err(KucoinError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.list_active_orders(" ", None).await,
        Err(KucoinError::InvalidRequest(_))
    ));
    assert!(matches!(
        client.cancel_withdrawal("BTC", "").await,
        Err(KucoinError::InvalidRequest(_))
    ));
}

#[tokio::test]
async fn test_private_endpoint_without_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = KucoinRestClient::builder().base_url(server.uri()).build();
    assert!(matches!(
        client.get_coin_balance("KCS").await,
        Err(KucoinError::CredentialsMissing)
    ));
}
