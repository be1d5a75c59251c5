use crate::common::{api_error, create_test_client, settlement_action_json};
use ledger_api_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_list_settlement_actions() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/settlements/stl_1/actions")
        .with_status(200)
        .with_body(
            json!([
                settlement_action_json("act_1", "APPLIED"),
                settlement_action_json("act_2", "PENDING")
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    let result = client.list_settlement_actions("stl_1").await.unwrap();

    let Some(ListSettlementActionsResponse::Ok(actions)) = result else {
        panic!("expected settlement actions");
    };
    assert_eq!(actions.len(), 2);
    assert!(actions[0].status.is_final());
    assert!(!actions[1].status.is_final());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_settlement_action_sends_idempotency_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/settlements/stl_1/actions")
        .match_header("idempotency-key", Matcher::Regex(r"^[A-Z0-9]{24}$".to_string()))
        .match_body(Matcher::Json(json!({"action": "APPROVE", "amount": "25.00"})))
        .with_status(202)
        .with_body(settlement_action_json("act_9", "PENDING").to_string())
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    let result = client
        .create_settlement_action(
            "stl_1",
            ApiSettlementActionRequest::new(ApiSettlementActionType::Approve)
                .with_amount(Decimal::new(2500, 2)),
            None,
        )
        .await
        .unwrap();

    assert!(matches!(
        result,
        Some(CreateSettlementActionResponse::Accepted(a)) if a.id == "act_9"
    ));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_retry_reuses_idempotency_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/settlements/stl_1/actions")
        .match_header("idempotency-key", "fixed-key-1")
        .with_status(409)
        .with_body(api_error("settlement_closed", "settlement already closed"))
        .expect(2)
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    let request = CreateSettlementAction::new(
        "stl_1",
        ApiSettlementActionRequest::new(ApiSettlementActionType::Reject),
    )
    .with_idempotency_key("fixed-key-1");

    for _ in 0..2 {
        let result = client.send(&request).await.unwrap();
        assert!(matches!(result, Some(CreateSettlementActionResponse::Conflict(_))));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_service_retry_with_caller_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/settlements/stl_1/actions")
        .match_header("idempotency-key", "caller-key-7")
        .with_status(202)
        .with_body(settlement_action_json("act_7", "PENDING").to_string())
        .expect(2)
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    for _ in 0..2 {
        let result = client
            .create_settlement_action(
                "stl_1",
                ApiSettlementActionRequest::new(ApiSettlementActionType::Approve),
                Some("caller-key-7"),
            )
            .await
            .unwrap();
        assert!(matches!(
            result,
            Some(CreateSettlementActionResponse::Accepted(a)) if a.id == "act_7"
        ));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_settlement_action_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/settlements/stl_x/actions")
        .with_status(404)
        .with_body(api_error("settlement_not_found", "unknown settlement"))
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    let result = client
        .create_settlement_action(
            "stl_x",
            ApiSettlementActionRequest::new(ApiSettlementActionType::Hold),
            None,
        )
        .await
        .unwrap();
    assert!(matches!(result, Some(CreateSettlementActionResponse::NotFound(_))));
}

#[tokio::test]
async fn test_cancel_settlement_action() {
    let mut server = Server::new_async().await;
    let cancelled = server
        .mock("DELETE", "/api/settlements/stl_1/actions/act_1")
        .with_status(204)
        .create_async()
        .await;
    let _missing = server
        .mock("DELETE", "/api/settlements/stl_1/actions/act_404")
        .with_status(404)
        .with_body(api_error("action_not_found", "unknown action"))
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);

    let result = client.cancel_settlement_action("stl_1", "act_1").await.unwrap();
    assert_eq!(result, Some(CancelSettlementActionResponse::NoContent));
    cancelled.assert_async().await;

    let result = client.cancel_settlement_action("stl_1", "act_404").await.unwrap();
    assert!(matches!(result, Some(CancelSettlementActionResponse::NotFound(_))));
}

#[tokio::test]
async fn test_cancel_undocumented_status_returns_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/api/settlements/stl_1/actions/act_1")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = create_test_client(&server.url(), false);
    let result = client.cancel_settlement_action("stl_1", "act_1").await.unwrap();
    assert!(result.is_none());
}
