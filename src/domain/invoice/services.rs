use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::Instrument;
use uuid::Uuid;

use super::entities::{InvoiceDraft, SubmissionReceipt};
use super::errors::InvoiceError;
use super::ports::InvoiceSubmitter;

pub type SubmissionOutcome = Result<SubmissionReceipt, InvoiceError>;

/// Subscription to a running submission task.
///
/// The outcome can be read exactly once: both accessors consume the handle.
#[derive(Debug)]
pub struct SubmissionHandle {
  task_id: Uuid,
  outcome: oneshot::Receiver<SubmissionOutcome>,
}

impl SubmissionHandle {
  pub fn task_id(&self) -> Uuid {
    self.task_id
  }

  /// Wait for the task to report.
  pub async fn outcome(self) -> SubmissionOutcome {
    self
      .outcome
      .await
      .unwrap_or(Err(InvoiceError::SubmissionAborted))
  }

  /// Wait for the task to report, giving up after `timeout`.
  ///
  /// The task itself keeps running when the wait is abandoned.
  pub async fn outcome_within(self, timeout: Duration) -> SubmissionOutcome {
    match tokio::time::timeout(timeout, self.outcome()).await {
      Ok(outcome) => outcome,
      Err(_) => Err(InvoiceError::SubmissionTimedOut(timeout.as_secs())),
    }
  }
}

/// Starts invoice submissions as independent background tasks.
pub struct InvoiceSubmissionService {
  submitter: Arc<dyn InvoiceSubmitter>,
}

impl InvoiceSubmissionService {
  pub fn new(submitter: Arc<dyn InvoiceSubmitter>) -> Self {
    Self { submitter }
  }

  /// Spawn a submission for `draft` and return a handle to its outcome.
  ///
  /// Must be called from within a tokio runtime. Concurrent submissions are
  /// not coordinated with each other.
  pub fn submit(&self, draft: InvoiceDraft) -> SubmissionHandle {
    let (sender, receiver) = oneshot::channel();
    let submitter = Arc::clone(&self.submitter);
    let task_id = Uuid::new_v4();
    let span = tracing::info_span!("invoice_submission", %task_id);

    tokio::spawn(
      async move {
        let outcome = submitter.submit(&draft).await;

        match &outcome {
          Ok(receipt) => tracing::info!(
            submission_id = %receipt.submission_id,
            client = %receipt.client_name,
            "Invoice submission completed"
          ),
          Err(e) => tracing::warn!("Invoice submission failed: {}", e),
        }

        if sender.send(outcome).is_err() {
          tracing::debug!("Submission outcome discarded, no subscriber left");
        }
      }
      .instrument(span),
    );

    SubmissionHandle {
      task_id,
      outcome: receiver,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{ClientName, Currency, Money};
  use async_trait::async_trait;
  use chrono::NaiveDate;
  use rust_decimal_macros::dec;
  use std::sync::atomic::{AtomicUsize, Ordering};

  struct DelayedSubmitter {
    delay: Duration,
    calls: AtomicUsize,
  }

  #[async_trait]
  impl InvoiceSubmitter for DelayedSubmitter {
    async fn submit(&self, draft: &InvoiceDraft) -> SubmissionOutcome {
      self.calls.fetch_add(1, Ordering::SeqCst);
      tokio::time::sleep(self.delay).await;
      Ok(SubmissionReceipt::for_draft(draft))
    }
  }

  struct RejectingSubmitter;

  #[async_trait]
  impl InvoiceSubmitter for RejectingSubmitter {
    async fn submit(&self, _draft: &InvoiceDraft) -> SubmissionOutcome {
      Err(InvoiceError::SubmissionFailed("billing backend rejected draft".into()))
    }
  }

  struct PanickingSubmitter;

  #[async_trait]
  impl InvoiceSubmitter for PanickingSubmitter {
    async fn submit(&self, _draft: &InvoiceDraft) -> SubmissionOutcome {
      panic!("submitter crashed");
    }
  }

  fn draft(client: &str) -> InvoiceDraft {
    InvoiceDraft::new(
      ClientName::new(client).unwrap(),
      None,
      None,
      Money::new(dec!(500), Currency::USD).unwrap(),
      NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
      None,
      None,
    )
    .unwrap()
  }

  fn delayed(delay: Duration) -> Arc<DelayedSubmitter> {
    Arc::new(DelayedSubmitter {
      delay,
      calls: AtomicUsize::new(0),
    })
  }

  #[tokio::test(start_paused = true)]
  async fn test_outcome_arrives_after_delay() {
    let submitter = delayed(Duration::from_secs(1));
    let service = InvoiceSubmissionService::new(submitter.clone());

    let started = tokio::time::Instant::now();
    let receipt = service.submit(draft("Acme Co")).outcome().await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(receipt.client_name, "Acme Co");
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
  }

  #[tokio::test(start_paused = true)]
  async fn test_concurrent_submissions_are_independent() {
    let submitter = delayed(Duration::from_secs(1));
    let service = InvoiceSubmissionService::new(submitter.clone());

    let first = service.submit(draft("Acme Co"));
    let second = service.submit(draft("Acme Co"));
    assert_ne!(first.task_id(), second.task_id());

    let (a, b) = tokio::join!(first.outcome(), second.outcome());
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_ne!(a.submission_id, b.submission_id);
    assert_eq!(submitter.calls.load(Ordering::SeqCst), 2);
  }

  #[tokio::test]
  async fn test_submitter_error_is_reported() {
    let service = InvoiceSubmissionService::new(Arc::new(RejectingSubmitter));
    let result = service.submit(draft("Acme Co")).outcome().await;
    assert!(matches!(result, Err(InvoiceError::SubmissionFailed(_))));
  }

  #[tokio::test]
  async fn test_crashed_task_reports_abort() {
    let service = InvoiceSubmissionService::new(Arc::new(PanickingSubmitter));
    let result = service.submit(draft("Acme Co")).outcome().await;
    assert!(matches!(result, Err(InvoiceError::SubmissionAborted)));
  }

  #[tokio::test(start_paused = true)]
  async fn test_slow_submission_times_out() {
    let service = InvoiceSubmissionService::new(delayed(Duration::from_secs(30)));
    let result = service
      .submit(draft("Acme Co"))
      .outcome_within(Duration::from_secs(10))
      .await;
    assert!(matches!(result, Err(InvoiceError::SubmissionTimedOut(10))));
  }
}
