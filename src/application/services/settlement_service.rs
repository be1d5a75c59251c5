use crate::api::settlement_actions::{
    CancelSettlementAction, CancelSettlementActionResponse, CreateSettlementAction,
    CreateSettlementActionResponse, ListSettlementActions, ListSettlementActionsResponse,
};
use crate::application::client::Client;
use crate::application::interfaces::settlement::SettlementService;
use crate::error::AppError;
use crate::model::settlement::ApiSettlementActionRequest;
use async_trait::async_trait;
use tracing::{debug, info, warn};

#[async_trait]
impl SettlementService for Client {
    async fn list_settlement_actions(
        &self,
        settlement_id: &str,
    ) -> Result<Option<ListSettlementActionsResponse>, AppError> {
        info!("Listing actions of settlement {}", settlement_id);

        let result = self.send(&ListSettlementActions::new(settlement_id)).await?;

        if let Some(ListSettlementActionsResponse::Ok(actions)) = &result {
            debug!("Settlement actions obtained: {} actions", actions.len());
        }
        Ok(result)
    }

    async fn create_settlement_action(
        &self,
        settlement_id: &str,
        action: ApiSettlementActionRequest,
        idempotency_key: Option<&str>,
    ) -> Result<Option<CreateSettlementActionResponse>, AppError> {
        let mut request = CreateSettlementAction::new(settlement_id, action);
        if let Some(key) = idempotency_key {
            request = request.with_idempotency_key(key);
        }
        info!(
            "Requesting {} on settlement {} (key {})",
            request.body.action.as_str(), settlement_id, request.idempotency_key
        );

        let result = self.send(&request).await?;

        match &result {
            Some(CreateSettlementActionResponse::Accepted(accepted)) => {
                debug!("Settlement action accepted: {} ({})", accepted.id, accepted.status.as_str());
            }
            Some(CreateSettlementActionResponse::Conflict(err)) => {
                warn!("Settlement action refused: {}", err.message);
            }
            _ => {}
        }
        Ok(result)
    }

    async fn cancel_settlement_action(
        &self,
        settlement_id: &str,
        action_id: &str,
    ) -> Result<Option<CancelSettlementActionResponse>, AppError> {
        info!("Cancelling action {} of settlement {}", action_id, settlement_id);
        self.send(&CancelSettlementAction::new(settlement_id, action_id))
            .await
    }
}
