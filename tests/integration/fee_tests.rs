use crate::common::{api_error, create_test_client};
use chrono::TimeZone;
use ledger_api_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_get_fee_summary_query_and_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/fees/summary")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("account_id".into(), "acc_1".into()),
            Matcher::UrlEncoded("from".into(), "2026-01-01T00:00:00Z".into()),
            Matcher::UrlEncoded("to".into(), "2026-02-01T00:00:00Z".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "account_id": "acc_1",
                "currency": "EUR",
                "total_fees": "4.20",
                "fee_count": 2,
                "waived_total": null
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    let from = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
    let result = client
        .get_fee_summary("acc_1", Some(from), Some(to))
        .await
        .unwrap();

    match result {
        Some(GetFeeSummaryResponse::Ok(summary)) => {
            assert_eq!(summary.total_fees, Decimal::new(420, 2));
            assert!(summary.waived_total.is_null());
            assert!(summary.breakdown.is_none());
        }
        other => panic!("unexpected result: {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_fee_summary_documented_errors() {
    let mut server = Server::new_async().await;
    let _bad = server
        .mock("GET", "/api/fees/summary")
        .match_query(Matcher::UrlEncoded("account_id".into(), "bad".into()))
        .with_status(400)
        .with_body(api_error("invalid_period", "period too long"))
        .create_async()
        .await;
    let _missing = server
        .mock("GET", "/api/fees/summary")
        .match_query(Matcher::UrlEncoded("account_id".into(), "ghost".into()))
        .with_status(404)
        .with_body(api_error("account_not_found", "no such account"))
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);

    let bad = client.get_fee_summary("bad", None, None).await.unwrap();
    assert!(matches!(bad, Some(GetFeeSummaryResponse::BadRequest(e)) if e.code == "invalid_period"));

    let missing = client.get_fee_summary("ghost", None, None).await.unwrap();
    assert!(matches!(missing, Some(GetFeeSummaryResponse::NotFound(e)) if e.code == "account_not_found"));
}

#[tokio::test]
async fn test_list_fees_bad_paging_reaches_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/fees")
        .match_query(Matcher::UrlEncoded("page".into(), "0".into()))
        .with_status(400)
        .with_body(api_error("invalid_page", "page starts at 1"))
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    let request = ListFees {
        page: Some(0),
        ..ListFees::default()
    };
    let result = client.send(&request).await.unwrap();

    assert!(matches!(result, Some(ListFeesResponse::BadRequest(e)) if e.code == "invalid_page"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_inverted_period_reaches_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/fees/summary")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2026-03-01T00:00:00Z".into()),
            Matcher::UrlEncoded("to".into(), "2026-02-01T00:00:00Z".into()),
        ]))
        .with_status(400)
        .with_body(api_error("invalid_period", "from is after to"))
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    let from = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
    let result = client
        .get_fee_summary("acc_1", Some(from), Some(to))
        .await
        .unwrap();

    assert!(matches!(result, Some(GetFeeSummaryResponse::BadRequest(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_fees_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/fees")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("fee_type".into(), "CUSTODY".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "items": [{
                    "id": "fee_9",
                    "account_id": "acc_1",
                    "fee_type": "CUSTODY",
                    "amount": "0.75",
                    "currency": "EUR",
                    "charged_at": "2026-02-01T00:00:00Z",
                    "description": "monthly custody"
                }],
                "total": 51,
                "page": 2,
                "page_size": 50
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url(), true);
    let result = client
        .list_fees(None, Some(ApiFeeType::Custody), Some(2))
        .await
        .unwrap();

    match result {
        Some(ListFeesResponse::Ok(page)) => {
            assert_eq!(page.len(), 1);
            assert!(!page.has_next());
            assert_eq!(
                page.items[0].description.as_option().map(String::as_str),
                Some("monthly custody")
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
    mock.assert_async().await;
}
