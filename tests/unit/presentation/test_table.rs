use ledger_api_client::model::common::ApiPage;
use ledger_api_client::model::fees::ApiFeeSummary;
use ledger_api_client::model::ledger::ApiLedgerAccount;
use ledger_api_client::model::settlement::ApiSettlementAction;
use ledger_api_client::presentation::{
    fee_summary_table, ledger_accounts_table, settlement_actions_table,
};
use serde_json::json;

fn account(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "account_type": "ASSET",
        "currency": "EUR",
        "balance": "10.00",
        "status": "ACTIVE",
        "created_at": "2026-01-01T00:00:00Z"
    })
}

#[test]
fn test_ledger_accounts_table_sorted_and_truncated() {
    let page: ApiPage<ApiLedgerAccount> = serde_json::from_value(json!({
        "items": [
            account("acc_2", "zeta reserve"),
            account("acc_1", "Alpha operating account with a very long name"),
        ],
        "total": 7,
        "page": 1,
        "page_size": 2,
        "next_page": 2
    }))
    .unwrap();

    let table = ledger_accounts_table(&page);
    assert!(table.contains("NAME"));
    assert!(table.contains("Alpha operating account wit..."));
    assert!(!table.contains("very long name"));
    let alpha = table.find("acc_1").unwrap();
    let zeta = table.find("acc_2").unwrap();
    assert!(alpha < zeta);
    assert!(table.ends_with("Page 1 (2 of 7 accounts)"));
    assert!(table.contains("ASSET"));
    assert!(table.contains("ACTIVE"));
    assert!(!table.contains("Asset"));
}

#[test]
fn test_fee_summary_table_rows() {
    let summary: ApiFeeSummary = serde_json::from_value(json!({
        "account_id": "acc_1",
        "currency": "EUR",
        "total_fees": "12.50",
        "fee_count": 3,
        "breakdown": [{"fee_type": "CUSTODY", "amount": "12.50", "count": 3}],
        "waived_total": "1.00"
    }))
    .unwrap();

    let table = fee_summary_table(&summary);
    assert!(table.contains("CUSTODY"));
    assert!(table.contains("12.50 EUR"));
    assert!(table.contains("WAIVED"));
    assert!(table.contains("1.00 EUR"));
}

#[test]
fn test_fee_summary_table_without_waiver() {
    let summary: ApiFeeSummary = serde_json::from_value(json!({
        "account_id": "acc_1",
        "currency": "USD",
        "total_fees": "0",
        "fee_count": 0,
        "waived_total": null
    }))
    .unwrap();

    let table = fee_summary_table(&summary);
    assert!(table.contains("TOTAL"));
    assert!(!table.contains("WAIVED"));
}

#[test]
fn test_settlement_actions_table_order() {
    let actions: Vec<ApiSettlementAction> = serde_json::from_value(json!([
        {
            "id": "act_late",
            "settlement_id": "stl_1",
            "action": "RELEASE",
            "status": "APPLIED",
            "requested_at": "2026-04-02T09:00:00Z",
            "completed_at": "2026-04-02T09:05:00Z"
        },
        {
            "id": "act_early",
            "settlement_id": "stl_1",
            "action": "HOLD",
            "status": "PENDING",
            "requested_at": "2026-04-01T09:00:00Z",
            "amount": "5.00"
        }
    ]))
    .unwrap();

    let table = settlement_actions_table(&actions);
    assert!(table.find("act_early").unwrap() < table.find("act_late").unwrap());
    assert!(table.contains("2026-04-02 09:05:00"));
    assert!(table.contains("5.00"));
    assert!(table.contains("RELEASE"));
    assert!(table.contains("APPLIED"));
    assert!(table.contains("PENDING"));
    assert!(!table.contains("Pending"));
}
