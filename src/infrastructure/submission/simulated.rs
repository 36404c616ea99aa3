use async_trait::async_trait;
use std::time::Duration;

use crate::domain::invoice::{InvoiceDraft, InvoiceSubmitter, SubmissionOutcome, SubmissionReceipt};

/// Stand-in for the billing backend
///
/// Waits for a fixed delay and then accepts every draft. Nothing is stored.
pub struct SimulatedInvoiceSubmitter {
  delay: Duration,
}

impl SimulatedInvoiceSubmitter {
  pub fn new(delay: Duration) -> Self {
    Self { delay }
  }

  pub fn delay(&self) -> Duration {
    self.delay
  }
}

impl Default for SimulatedInvoiceSubmitter {
  fn default() -> Self {
    Self::new(Duration::from_millis(1000))
  }
}

#[async_trait]
impl InvoiceSubmitter for SimulatedInvoiceSubmitter {
  async fn submit(&self, draft: &InvoiceDraft) -> SubmissionOutcome {
    tracing::debug!(
      "SimulatedInvoiceSubmitter: holding draft for {} for {:?}",
      draft.client_name,
      self.delay
    );
    tokio::time::sleep(self.delay).await;
    Ok(SubmissionReceipt::for_draft(draft))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{ClientName, Currency, Money};
  use chrono::NaiveDate;
  use rust_decimal_macros::dec;

  #[tokio::test(start_paused = true)]
  async fn test_accepts_after_delay() {
    let submitter = SimulatedInvoiceSubmitter::default();
    assert_eq!(submitter.delay(), Duration::from_secs(1));

    let draft = InvoiceDraft::new(
      ClientName::new("Acme Co").unwrap(),
      None,
      None,
      Money::new(dec!(500), Currency::USD).unwrap(),
      NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
      None,
      None,
    )
    .unwrap();

    let started = tokio::time::Instant::now();
    let receipt = submitter.submit(&draft).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(receipt.client_name, "Acme Co");
    assert_eq!(receipt.amount, dec!(500));
  }
}
