use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketplaceError {
  #[error("Unknown purchaser category: {0}")]
  InvalidCategory(String),

  #[error("Catalog unavailable: {0}")]
  Catalog(String),
}
