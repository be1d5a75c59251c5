/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::api::{Endpoint, decode, format_datetime, push_query};
use crate::error::AppError;
use crate::model::common::{ApiError, ApiPage};
use crate::model::fees::{ApiFee, ApiFeeSummary, ApiFeeType};
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};

/// `GET /api/fees/summary`
#[derive(Debug, Clone, PartialEq)]
pub struct GetFeeSummary {
    /// Ledger account to summarise
    pub account_id: String,
    /// Start of the period
    pub from: Option<DateTime<Utc>>,
    /// End of the period
    pub to: Option<DateTime<Utc>>,
    /// Currency to convert the totals into
    pub currency: Option<String>,
}

impl GetFeeSummary {
    /// Summary over the whole account history in the account currency
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            from: None,
            to: None,
            currency: None,
        }
    }

    /// Restricts the summary to `[from, to]`
    #[must_use]
    pub fn period(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Converts totals into `currency`
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Documented responses of [`GetFeeSummary`]
#[derive(Debug, Clone, PartialEq)]
pub enum GetFeeSummaryResponse {
    /// 200
    Ok(ApiFeeSummary),
    /// 400
    BadRequest(ApiError),
    /// 404
    NotFound(ApiError),
}

impl Endpoint for GetFeeSummary {
    type Output = GetFeeSummaryResponse;
    const OPERATION_ID: &'static str = "get_fee_summary";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/api/fees/summary".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("account_id", self.account_id.clone())];
        push_query(&mut query, "from", self.from.as_ref().map(format_datetime));
        push_query(&mut query, "to", self.to.as_ref().map(format_datetime));
        push_query(&mut query, "currency", self.currency.as_ref());
        query
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        let parsed = match status {
            StatusCode::OK => GetFeeSummaryResponse::Ok(decode(content)?),
            StatusCode::BAD_REQUEST => GetFeeSummaryResponse::BadRequest(decode(content)?),
            StatusCode::NOT_FOUND => GetFeeSummaryResponse::NotFound(decode(content)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}

/// `GET /api/fees`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFees {
    /// Only fees charged to this account
    pub account_id: Option<String>,
    /// Only fees of this type
    pub fee_type: Option<ApiFeeType>,
    /// One-based page number
    pub page: Option<u32>,
    /// Items per page
    pub page_size: Option<u32>,
}

/// Documented responses of [`ListFees`]
#[derive(Debug, Clone, PartialEq)]
pub enum ListFeesResponse {
    /// 200
    Ok(ApiPage<ApiFee>),
    /// 400
    BadRequest(ApiError),
}

impl Endpoint for ListFees {
    type Output = ListFeesResponse;
    const OPERATION_ID: &'static str = "list_fees";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/api/fees".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "account_id", self.account_id.as_ref());
        push_query(&mut query, "fee_type", self.fee_type.as_ref());
        push_query(&mut query, "page", self.page);
        push_query(&mut query, "page_size", self.page_size);
        query
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        let parsed = match status {
            StatusCode::OK => ListFeesResponse::Ok(decode(content)?),
            StatusCode::BAD_REQUEST => ListFeesResponse::BadRequest(decode(content)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}
