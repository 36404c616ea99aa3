use async_trait::async_trait;

use super::entities::Purchaser;
use super::errors::MarketplaceError;

/// Read-only catalog of marketplace purchasers.
#[async_trait]
pub trait PurchaserCatalog: Send + Sync {
  async fn all(&self) -> Result<Vec<Purchaser>, MarketplaceError>;
}
