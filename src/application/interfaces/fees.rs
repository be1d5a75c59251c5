use crate::api::fees::{GetFeeSummaryResponse, ListFeesResponse};
use crate::error::AppError;
use crate::model::fees::ApiFeeType;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Interface for the fee operations
#[async_trait]
pub trait FeeService: Send + Sync {
    /// Gets the fee totals of an account
    ///
    /// # Arguments
    /// * `account_id` - Ledger account to summarise
    /// * `from` - Optional start of the period
    /// * `to` - Optional end of the period
    ///
    /// # Returns
    /// * `Ok(None)` when the server answered with an undocumented status
    async fn get_fee_summary(
        &self,
        account_id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Option<GetFeeSummaryResponse>, AppError>;

    /// Lists fees, optionally for one account and fee type
    async fn list_fees(
        &self,
        account_id: Option<&str>,
        fee_type: Option<ApiFeeType>,
        page: Option<u32>,
    ) -> Result<Option<ListFeesResponse>, AppError>;
}
