use crate::api::{Endpoint, decode};
use crate::error::AppError;
use crate::model::common::ApiHealth;
use reqwest::{Method, StatusCode};

/// `GET /api/health`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetHealth;

/// Documented responses of [`GetHealth`]
#[derive(Debug, Clone, PartialEq)]
pub enum GetHealthResponse {
    /// 200
    Ok(ApiHealth),
}

impl Endpoint for GetHealth {
    type Output = GetHealthResponse;
    const OPERATION_ID: &'static str = "get_health";

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/api/health".to_string()
    }

    fn parse(&self, status: StatusCode, content: &[u8]) -> Result<Option<Self::Output>, AppError> {
        match status {
            StatusCode::OK => Ok(Some(GetHealthResponse::Ok(decode(content)?))),
            _ => Ok(None),
        }
    }
}
