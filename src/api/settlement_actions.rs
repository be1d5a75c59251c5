/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::api::{Endpoint, decode, encode_path, require_path_param};
use crate::constants::IDEMPOTENCY_KEY_HEADER;
use crate::error::AppError;
use crate::model::common::ApiError;
use crate::model::settlement::{ApiSettlementAction, ApiSettlementActionRequest};
use crate::utils::id::{idempotency_key, is_valid_idempotency_key};
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// `GET /api/settlements/{settlement_id}/actions`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettlementActions {
    /// Settlement identifier
    pub settlement_id: String,
}

impl ListSettlementActions {
    /// Request for `settlement_id`
    #[must_use]
    pub fn new(settlement_id: impl Into<String>) -> Self {
        Self {
            settlement_id: settlement_id.into(),
        }
    }
}

/// Documented responses of [`ListSettlementActions`]
#[derive(Debug, Clone, PartialEq)]
pub enum ListSettlementActionsResponse {
    /// 200
    Ok(Vec<ApiSettlementAction>),
    /// 404
    NotFound(ApiError),
}

impl Endpoint for ListSettlementActions {
    type Output = ListSettlementActionsResponse;
    const OPERATION_ID: &'static str = "list_settlement_actions";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!(
            "/api/settlements/{}/actions",
            encode_path(&self.settlement_id)
        )
    }

    fn validate(&self) -> Result<(), AppError> {
        require_path_param("settlement_id", &self.settlement_id)
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        let parsed = match status {
            StatusCode::OK => ListSettlementActionsResponse::Ok(decode(content)?),
            StatusCode::NOT_FOUND => ListSettlementActionsResponse::NotFound(decode(content)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}

/// `POST /api/settlements/{settlement_id}/actions`
///
/// Carries an `Idempotency-Key` header. A key is generated on construction;
/// reuse the same request value to retry safely.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSettlementAction {
    /// Settlement identifier
    pub settlement_id: String,
    /// Action to record
    pub body: ApiSettlementActionRequest,
    /// Value of the `Idempotency-Key` header
    pub idempotency_key: String,
}

impl CreateSettlementAction {
    /// Request recording `body` on `settlement_id` with a fresh idempotency key
    #[must_use]
    pub fn new(settlement_id: impl Into<String>, body: ApiSettlementActionRequest) -> Self {
        Self {
            settlement_id: settlement_id.into(),
            body,
            idempotency_key: idempotency_key(),
        }
    }

    /// Replaces the generated idempotency key
    #[must_use]
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = key.into();
        self
    }
}

/// Documented responses of [`CreateSettlementAction`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateSettlementActionResponse {
    /// 202, the action was accepted for processing
    Accepted(ApiSettlementAction),
    /// 404
    NotFound(ApiError),
    /// 409, the settlement state does not allow the action
    Conflict(ApiError),
}

impl Endpoint for CreateSettlementAction {
    type Output = CreateSettlementActionResponse;
    const OPERATION_ID: &'static str = "create_settlement_action";

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!(
            "/api/settlements/{}/actions",
            encode_path(&self.settlement_id)
        )
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![(IDEMPOTENCY_KEY_HEADER, self.idempotency_key.clone())]
    }

    fn body(&self) -> Result<Option<Value>, AppError> {
        Ok(Some(serde_json::to_value(&self.body)?))
    }

    fn validate(&self) -> Result<(), AppError> {
        require_path_param("settlement_id", &self.settlement_id)?;
        if !is_valid_idempotency_key(&self.idempotency_key) {
            return Err(AppError::InvalidInput(format!(
                "invalid idempotency key: {:?}",
                self.idempotency_key
            )));
        }
        Ok(())
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        let parsed = match status {
            StatusCode::ACCEPTED => CreateSettlementActionResponse::Accepted(decode(content)?),
            StatusCode::NOT_FOUND => CreateSettlementActionResponse::NotFound(decode(content)?),
            StatusCode::CONFLICT => CreateSettlementActionResponse::Conflict(decode(content)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}

/// `DELETE /api/settlements/{settlement_id}/actions/{action_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelSettlementAction {
    /// Settlement identifier
    pub settlement_id: String,
    /// Action identifier
    pub action_id: String,
}

impl CancelSettlementAction {
    /// Request cancelling `action_id` on `settlement_id`
    #[must_use]
    pub fn new(settlement_id: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            settlement_id: settlement_id.into(),
            action_id: action_id.into(),
        }
    }
}

/// Documented responses of [`CancelSettlementAction`]
#[derive(Debug, Clone, PartialEq)]
pub enum CancelSettlementActionResponse {
    /// 204
    NoContent,
    /// 404
    NotFound(ApiError),
}

impl Endpoint for CancelSettlementAction {
    type Output = CancelSettlementActionResponse;
    const OPERATION_ID: &'static str = "cancel_settlement_action";

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!(
            "/api/settlements/{}/actions/{}",
            encode_path(&self.settlement_id),
            encode_path(&self.action_id)
        )
    }

    fn validate(&self) -> Result<(), AppError> {
        require_path_param("settlement_id", &self.settlement_id)?;
        require_path_param("action_id", &self.action_id)
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        let parsed = match status {
            StatusCode::NO_CONTENT => CancelSettlementActionResponse::NoContent,
            StatusCode::NOT_FOUND => CancelSettlementActionResponse::NotFound(decode(content)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }
}
