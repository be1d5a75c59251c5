use crate::api::health::{GetHealth, GetHealthResponse};
use crate::application::client::Client;
use crate::application::interfaces::health::HealthService;
use crate::error::AppError;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl HealthService for Client {
    async fn get_health(&self) -> Result<Option<GetHealthResponse>, AppError> {
        let result = self.send(&GetHealth).await?;
        if let Some(GetHealthResponse::Ok(health)) = &result {
            debug!("Health: {}", health.status);
        }
        Ok(result)
    }
}
