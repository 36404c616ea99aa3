use async_trait::async_trait;

use super::entities::ValuationJob;
use super::errors::JobError;

/// Read-only source of valuation jobs.
#[async_trait]
pub trait JobListing: Send + Sync {
  async fn list(&self) -> Result<Vec<ValuationJob>, JobError>;
}
