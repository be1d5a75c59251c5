use crate::api::health::GetHealthResponse;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the health check
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Gets the service health report
    async fn get_health(&self) -> Result<Option<GetHealthResponse>, AppError>;
}
