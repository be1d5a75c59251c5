/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::api::{
    Endpoint, decode, encode_path, format_datetime, push_query, require_path_param,
};
use crate::error::AppError;
use crate::model::common::{ApiError, ApiPage};
use crate::model::ledger::{
    ApiAccountStatus, ApiCreateLedgerAccount, ApiLedgerAccount, ApiLedgerEntry,
};
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// `GET /api/ledger/accounts`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListLedgerAccounts {
    /// Only accounts in this currency
    pub currency: Option<String>,
    /// Only accounts in this state
    pub status: Option<ApiAccountStatus>,
    /// One-based page number
    pub page: Option<u32>,
    /// Items per page
    pub page_size: Option<u32>,
}

/// Documented responses of [`ListLedgerAccounts`]
#[derive(Debug, Clone, PartialEq)]
pub enum ListLedgerAccountsResponse {
    /// 200
    Ok(ApiPage<ApiLedgerAccount>),
}

impl Endpoint for ListLedgerAccounts {
    type Output = ListLedgerAccountsResponse;
    const OPERATION_ID: &'static str = "list_ledger_accounts";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/api/ledger/accounts".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "currency", self.currency.as_ref());
        push_query(&mut query, "status", self.status.map(|s| s.as_str()));
        push_query(&mut query, "page", self.page);
        push_query(&mut query, "page_size", self.page_size);
        query
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        match status {
            StatusCode::OK => Ok(Some(ListLedgerAccountsResponse::Ok(decode(content)?))),
            _ => Ok(None),
        }
    }
}

/// `GET /api/ledger/accounts/{account_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetLedgerAccount {
    /// Account identifier
    pub account_id: String,
}

impl GetLedgerAccount {
    /// Request for `account_id`
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// Documented responses of [`GetLedgerAccount`]
#[derive(Debug, Clone, PartialEq)]
pub enum GetLedgerAccountResponse {
    /// 200
    Ok(ApiLedgerAccount),
    /// 404
    NotFound(ApiError),
}

impl Endpoint for GetLedgerAccount {
    type Output = GetLedgerAccountResponse;
    const OPERATION_ID: &'static str = "get_ledger_account";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("/api/ledger/accounts/{}", encode_path(&self.account_id))
    }

    fn validate(&self) -> Result<(), AppError> {
        require_path_param("account_id", &self.account_id)
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        let parsed = match status {
            StatusCode::OK => GetLedgerAccountResponse::Ok(decode(content)?),
            StatusCode::NOT_FOUND => GetLedgerAccountResponse::NotFound(decode(content)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}

/// `POST /api/ledger/accounts`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateLedgerAccount {
    /// Account to create
    pub body: ApiCreateLedgerAccount,
}

impl CreateLedgerAccount {
    /// Request creating `body`
    #[must_use]
    pub fn new(body: ApiCreateLedgerAccount) -> Self {
        Self { body }
    }
}

/// Documented responses of [`CreateLedgerAccount`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateLedgerAccountResponse {
    /// 201
    Created(ApiLedgerAccount),
    /// 409, an account with the same name already exists
    Conflict(ApiError),
    /// 422, the body failed validation
    UnprocessableEntity(ApiError),
}

impl Endpoint for CreateLedgerAccount {
    type Output = CreateLedgerAccountResponse;
    const OPERATION_ID: &'static str = "create_ledger_account";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/api/ledger/accounts".to_string()
    }

    fn body(&self) -> Result<Option<Value>, AppError> {
        Ok(Some(serde_json::to_value(&self.body)?))
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        let parsed = match status {
            StatusCode::CREATED => CreateLedgerAccountResponse::Created(decode(content)?),
            StatusCode::CONFLICT => CreateLedgerAccountResponse::Conflict(decode(content)?),
            StatusCode::UNPROCESSABLE_ENTITY => {
                CreateLedgerAccountResponse::UnprocessableEntity(decode(content)?)
            }
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}

/// `GET /api/ledger/accounts/{account_id}/entries`
#[derive(Debug, Clone, PartialEq)]
pub struct ListLedgerEntries {
    /// Account identifier
    pub account_id: String,
    /// Only entries posted at or after this time
    pub from: Option<DateTime<Utc>>,
    /// Only entries posted at or before this time
    pub to: Option<DateTime<Utc>>,
    /// One-based page number
    pub page: Option<u32>,
    /// Items per page
    pub page_size: Option<u32>,
}

impl ListLedgerEntries {
    /// First page of entries for `account_id`
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            from: None,
            to: None,
            page: None,
            page_size: None,
        }
    }

    /// Selects a page
    #[must_use]
    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }
}

/// Documented responses of [`ListLedgerEntries`]
#[derive(Debug, Clone, PartialEq)]
pub enum ListLedgerEntriesResponse {
    /// 200
    Ok(ApiPage<ApiLedgerEntry>),
    /// 404
    NotFound(ApiError),
}

impl Endpoint for ListLedgerEntries {
    type Output = ListLedgerEntriesResponse;
    const OPERATION_ID: &'static str = "list_ledger_entries";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!(
            "/api/ledger/accounts/{}/entries",
            encode_path(&self.account_id)
        )
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_query(&mut query, "from", self.from.as_ref().map(format_datetime));
        push_query(&mut query, "to", self.to.as_ref().map(format_datetime));
        push_query(&mut query, "page", self.page);
        push_query(&mut query, "page_size", self.page_size);
        query
    }

    fn validate(&self) -> Result<(), AppError> {
        require_path_param("account_id", &self.account_id)
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        let parsed = match status {
            StatusCode::OK => ListLedgerEntriesResponse::Ok(decode(content)?),
            StatusCode::NOT_FOUND => ListLedgerEntriesResponse::NotFound(decode(content)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}
