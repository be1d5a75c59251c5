use crate::api::settlement_actions::{
    CancelSettlementActionResponse, CreateSettlementActionResponse, ListSettlementActionsResponse,
};
use crate::error::AppError;
use crate::model::settlement::ApiSettlementActionRequest;
use async_trait::async_trait;

/// Interface for the settlement action operations
#[async_trait]
pub trait SettlementService: Send + Sync {
    /// Lists the actions recorded on a settlement
    async fn list_settlement_actions(
        &self,
        settlement_id: &str,
    ) -> Result<Option<ListSettlementActionsResponse>, AppError>;

    /// Records an action on a settlement
    ///
    /// Pass the same `idempotency_key` when retrying a call. With `None` a
    /// fresh key is generated.
    async fn create_settlement_action(
        &self,
        settlement_id: &str,
        action: ApiSettlementActionRequest,
        idempotency_key: Option<&str>,
    ) -> Result<Option<CreateSettlementActionResponse>, AppError>;

    /// Cancels a pending action
    async fn cancel_settlement_action(
        &self,
        settlement_id: &str,
        action_id: &str,
    ) -> Result<Option<CancelSettlementActionResponse>, AppError>;
}
