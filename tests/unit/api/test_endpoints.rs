use ledger_api_client::api::Endpoint;
use ledger_api_client::api::build_response;
use ledger_api_client::error::AppError;
use ledger_api_client::model::http::RawResponse;
use ledger_api_client::prelude::*;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::json;

fn raw(status: StatusCode, body: &str) -> RawResponse {
    RawResponse {
        status,
        headers: HeaderMap::new(),
        content: body.as_bytes().to_vec(),
    }
}

#[test]
fn test_operation_methods_and_paths() {
    assert_eq!(GetHealth.method(), Method::GET);
    assert_eq!(GetHealth.path(), "/api/health");
    assert_eq!(GetFeeSummary::new("acc").path(), "/api/fees/summary");
    assert_eq!(ListFees::default().path(), "/api/fees");
    assert_eq!(ListLedgerAccounts::default().path(), "/api/ledger/accounts");
    assert_eq!(
        ListSettlementActions::new("stl_1").path(),
        "/api/settlements/stl_1/actions"
    );

    let cancel = CancelSettlementAction::new("stl_1", "act/2");
    assert_eq!(cancel.method(), Method::DELETE);
    assert_eq!(cancel.path(), "/api/settlements/stl_1/actions/act%2F2");

    let create = CreateLedgerAccount::new(ApiCreateLedgerAccount::new(
        "Cash",
        ApiLedgerAccountType::Asset,
        "EUR",
    ));
    assert_eq!(create.method(), Method::POST);
}

#[test]
fn test_operation_ids() {
    assert_eq!(GetHealth::OPERATION_ID, "get_health");
    assert_eq!(GetFeeSummary::OPERATION_ID, "get_fee_summary");
    assert_eq!(ListFees::OPERATION_ID, "list_fees");
    assert_eq!(ListLedgerAccounts::OPERATION_ID, "list_ledger_accounts");
    assert_eq!(GetLedgerAccount::OPERATION_ID, "get_ledger_account");
    assert_eq!(CreateLedgerAccount::OPERATION_ID, "create_ledger_account");
    assert_eq!(ListLedgerEntries::OPERATION_ID, "list_ledger_entries");
    assert_eq!(ListSettlementActions::OPERATION_ID, "list_settlement_actions");
    assert_eq!(CreateSettlementAction::OPERATION_ID, "create_settlement_action");
    assert_eq!(CancelSettlementAction::OPERATION_ID, "cancel_settlement_action");
}

#[test]
fn test_documented_error_status_decodes_api_error() {
    let body = json!({"code": "account_not_found", "message": "no such account"}).to_string();
    let response = build_response(
        &GetLedgerAccount::new("acc_9"),
        raw(StatusCode::NOT_FOUND, &body),
        true,
    )
    .unwrap();

    assert_eq!(response.status_code, StatusCode::NOT_FOUND);
    match response.parsed {
        Some(GetLedgerAccountResponse::NotFound(err)) => {
            assert_eq!(err.code, "account_not_found");
            assert!(err.details.is_unset());
        }
        other => panic!("unexpected parse result: {other:?}"),
    }
}

#[test]
fn test_undocumented_status_without_raise_keeps_raw_body() {
    let response = build_response(
        &GetHealth,
        raw(StatusCode::SERVICE_UNAVAILABLE, "down for maintenance"),
        false,
    )
    .unwrap();

    assert_eq!(response.status_code, StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.parsed.is_none());
    assert_eq!(response.text(), "down for maintenance");
}

#[test]
fn test_undocumented_status_with_raise_fails() {
    let result = build_response(
        &GetHealth,
        raw(StatusCode::SERVICE_UNAVAILABLE, "down for maintenance"),
        true,
    );

    match result {
        Err(AppError::UnexpectedStatus { status, content }) => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(content, b"down for maintenance".to_vec());
        }
        other => panic!("expected unexpected status error, got {other:?}"),
    }
}

#[test]
fn test_documented_status_with_bad_body_is_json_error() {
    let result = build_response(&GetHealth, raw(StatusCode::OK, "not json"), false);
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_no_content_ignores_body() {
    let response = build_response(
        &CancelSettlementAction::new("stl_1", "act_1"),
        raw(StatusCode::NO_CONTENT, ""),
        true,
    )
    .unwrap();
    assert_eq!(response.parsed, Some(CancelSettlementActionResponse::NoContent));
}

#[test]
fn test_create_settlement_action_body_and_header() {
    let request = CreateSettlementAction::new(
        "stl_1",
        ApiSettlementActionRequest::new(ApiSettlementActionType::Hold).with_note("kyc"),
    )
    .with_idempotency_key("retry-1");

    assert_eq!(
        request.body().unwrap(),
        Some(json!({"action": "HOLD", "note": "kyc"}))
    );
    assert_eq!(
        request.headers(),
        vec![(IDEMPOTENCY_KEY_HEADER, "retry-1".to_string())]
    );
    assert!(request.validate().is_ok());
}

#[test]
fn test_get_operations_have_no_body() {
    assert_eq!(GetHealth.body().unwrap(), None);
    assert_eq!(GetLedgerAccount::new("acc").body().unwrap(), None);
    assert!(GetLedgerAccount::new("acc").headers().is_empty());
}
