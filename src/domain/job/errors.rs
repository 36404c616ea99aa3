use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
  #[error("Unknown job status: {0}")]
  InvalidStatus(String),

  #[error("Listing unavailable: {0}")]
  Listing(String),
}
