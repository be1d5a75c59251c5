use crate::api::fees::{GetFeeSummary, GetFeeSummaryResponse, ListFees, ListFeesResponse};
use crate::application::client::Client;
use crate::application::interfaces::fees::FeeService;
use crate::error::AppError;
use crate::model::fees::ApiFeeType;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

#[async_trait]
impl FeeService for Client {
    async fn get_fee_summary(
        &self,
        account_id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Option<GetFeeSummaryResponse>, AppError> {
        info!("Getting fee summary for account {}", account_id);

        let request = GetFeeSummary {
            account_id: account_id.to_string(),
            from,
            to,
            currency: None,
        };
        let result = self.send(&request).await?;

        if let Some(GetFeeSummaryResponse::Ok(summary)) = &result {
            debug!(
                "Fee summary obtained: {} fees totalling {} {}",
                summary.fee_count, summary.total_fees, summary.currency
            );
        }
        Ok(result)
    }

    async fn list_fees(
        &self,
        account_id: Option<&str>,
        fee_type: Option<ApiFeeType>,
        page: Option<u32>,
    ) -> Result<Option<ListFeesResponse>, AppError> {
        info!("Listing fees");

        let request = ListFees {
            account_id: account_id.map(str::to_string),
            fee_type,
            page,
            page_size: None,
        };
        let result = self.send(&request).await?;

        if let Some(ListFeesResponse::Ok(fees)) = &result {
            debug!("Fees obtained: {} of {}", fees.len(), fees.total);
        }
        Ok(result)
    }
}
