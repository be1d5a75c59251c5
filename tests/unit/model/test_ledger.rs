use assert_json_diff::assert_json_eq;
use ledger_api_client::model::ledger::{
    ApiAccountStatus, ApiCreateLedgerAccount, ApiEntryDirection, ApiLedgerAccount,
    ApiLedgerAccountType, ApiLedgerEntry,
};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_ledger_account_round_trip_with_extras() {
    let input = json!({
        "id": "acc_1",
        "name": "Operating cash",
        "account_type": "ASSET",
        "currency": "EUR",
        "balance": "1500.00",
        "status": "ACTIVE",
        "created_at": "2026-01-15T08:30:00Z",
        "closed_at": null,
        "metadata": {"cost_center": "ops"},
        "region": "eu-west"
    });

    let account: ApiLedgerAccount = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(account.account_type, ApiLedgerAccountType::Asset);
    assert!(account.is_active());
    assert!(account.closed_at.is_null());
    assert!(account.available_balance.is_none());
    assert_eq!(account.additional_properties.get("region"), Some(&json!("eu-west")));

    assert_json_eq!(serde_json::to_value(&account).unwrap(), input);
}

#[test]
fn test_closed_account_is_not_active() {
    let account: ApiLedgerAccount = serde_json::from_value(json!({
        "id": "acc_2",
        "name": "Old",
        "account_type": "EXPENSE",
        "currency": "USD",
        "balance": "0",
        "status": "CLOSED",
        "created_at": "2025-01-01T00:00:00Z",
        "closed_at": "2026-01-01T00:00:00Z"
    }))
    .unwrap();
    assert!(!account.is_active());
    assert!(account.closed_at.is_present());
    assert_eq!(ApiAccountStatus::Closed.as_str(), "CLOSED");
}

#[test]
fn test_create_ledger_account_serialization() {
    let body = ApiCreateLedgerAccount::new("Fees payable", ApiLedgerAccountType::Liability, "USD")
        .with_metadata("owner", "finance");

    assert_json_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({
            "name": "Fees payable",
            "account_type": "LIABILITY",
            "currency": "USD",
            "metadata": {"owner": "finance"}
        })
    );
}

#[test]
fn test_entry_signed_amount() {
    let entry: ApiLedgerEntry = serde_json::from_value(json!({
        "id": "ent_1",
        "account_id": "acc_1",
        "amount": "25.00",
        "direction": "DEBIT",
        "balance_after": "75.00",
        "posted_at": "2026-03-01T12:00:00Z"
    }))
    .unwrap();

    assert_eq!(entry.direction, ApiEntryDirection::Debit);
    assert_eq!(entry.signed_amount(), Decimal::new(-2500, 2));
    assert!(entry.reference.is_unset());
}

#[test]
fn test_account_type_as_str_matches_wire_form() {
    for account_type in [
        ApiLedgerAccountType::Asset,
        ApiLedgerAccountType::Liability,
        ApiLedgerAccountType::Equity,
        ApiLedgerAccountType::Revenue,
        ApiLedgerAccountType::Expense,
    ] {
        assert_eq!(
            serde_json::to_value(account_type).unwrap(),
            json!(account_type.as_str())
        );
    }
}
