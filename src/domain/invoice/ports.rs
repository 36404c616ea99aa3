use async_trait::async_trait;

use super::entities::{InvoiceDraft, InvoiceSummary, SubmissionReceipt};
use super::errors::InvoiceError;

/// Backend that accepts invoice drafts.
///
/// Implementations may take arbitrarily long; callers bound the wait
/// themselves.
#[async_trait]
pub trait InvoiceSubmitter: Send + Sync {
  async fn submit(&self, draft: &InvoiceDraft) -> Result<SubmissionReceipt, InvoiceError>;
}

/// Read-only source of the invoices shown on the invoicing list.
#[async_trait]
pub trait InvoiceListing: Send + Sync {
  async fn list(&self) -> Result<Vec<InvoiceSummary>, InvoiceError>;
}
