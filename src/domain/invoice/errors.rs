use super::value_objects::ValueObjectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Invoice submission failed: {0}")]
  SubmissionFailed(String),

  #[error("Invoice submission timed out after {0} seconds")]
  SubmissionTimedOut(u64),

  #[error("Invoice submission task ended without reporting an outcome")]
  SubmissionAborted,

  #[error("Listing unavailable: {0}")]
  Listing(String),
}
