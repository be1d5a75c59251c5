use assert_json_diff::assert_json_eq;
use ledger_api_client::model::settlement::{
    ApiSettlementAction, ApiSettlementActionRequest, ApiSettlementActionStatus,
    ApiSettlementActionType,
};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_settlement_action_round_trip() {
    let input = json!({
        "id": "act_1",
        "settlement_id": "stl_1",
        "action": "RELEASE",
        "status": "PENDING",
        "requested_at": "2026-04-01T09:00:00Z",
        "completed_at": null,
        "amount": "99.95"
    });

    let action: ApiSettlementAction = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(action.action, ApiSettlementActionType::Release);
    assert!(!action.status.is_final());
    assert!(action.completed_at.is_null());
    assert!(action.note.is_none());

    assert_json_eq!(serde_json::to_value(&action).unwrap(), input);
}

#[test]
fn test_final_statuses() {
    assert!(ApiSettlementActionStatus::Applied.is_final());
    assert!(ApiSettlementActionStatus::Failed.is_final());
    assert!(ApiSettlementActionStatus::Cancelled.is_final());
    assert!(!ApiSettlementActionStatus::Pending.is_final());
}

#[test]
fn test_action_request_builder() {
    let request = ApiSettlementActionRequest::new(ApiSettlementActionType::Reverse)
        .with_amount(Decimal::new(1000, 2))
        .with_note("duplicate payment");

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"action": "REVERSE", "amount": "10.00", "note": "duplicate payment"})
    );

    let bare = ApiSettlementActionRequest::new(ApiSettlementActionType::Approve);
    assert_json_eq!(serde_json::to_value(&bare).unwrap(), json!({"action": "APPROVE"}));
}

#[test]
fn test_as_str_matches_wire_form() {
    for action in [
        ApiSettlementActionType::Approve,
        ApiSettlementActionType::Reject,
        ApiSettlementActionType::Release,
        ApiSettlementActionType::Hold,
        ApiSettlementActionType::Reverse,
    ] {
        assert_eq!(serde_json::to_value(action).unwrap(), json!(action.as_str()));
    }
    for status in [
        ApiSettlementActionStatus::Pending,
        ApiSettlementActionStatus::Applied,
        ApiSettlementActionStatus::Failed,
        ApiSettlementActionStatus::Cancelled,
    ] {
        assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
    }
}
