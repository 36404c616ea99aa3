use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::domain::feedback::{Notification, Route};
use crate::domain::invoice::{
  ClientName, Currency, InvoiceDraft, InvoiceError, InvoiceNotes, InvoiceSubmissionService, Money,
  PropertyAddress, SubmissionHandle,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceCommand {
  pub client_name: String,
  pub client_email: Option<String>,
  pub property_address: Option<String>,
  pub amount: Decimal,
  pub currency: Option<String>,
  pub issue_date: Option<NaiveDate>,
  pub due_date: Option<NaiveDate>,
  pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateInvoiceResponse {
  pub submission_id: Uuid,
  pub notification: Notification,
  pub redirect_to: Route,
}

pub struct CreateInvoiceUseCase {
  submission_service: Arc<InvoiceSubmissionService>,
  timeout: Duration,
}

impl CreateInvoiceUseCase {
  pub fn new(submission_service: Arc<InvoiceSubmissionService>, timeout: Duration) -> Self {
    Self {
      submission_service,
      timeout,
    }
  }

  /// Validate the command and start its submission task.
  pub fn start(&self, command: CreateInvoiceCommand) -> Result<SubmissionHandle, InvoiceError> {
    let draft = build_draft(command)?;

    tracing::info!(
      client = %draft.client_name,
      amount = %draft.total,
      "Received invoice draft"
    );

    Ok(self.submission_service.submit(draft))
  }

  /// Submit and wait for the outcome.
  ///
  /// On success the response carries the notification to show and the
  /// listing to navigate to.
  pub async fn execute(
    &self,
    command: CreateInvoiceCommand,
  ) -> Result<CreateInvoiceResponse, InvoiceError> {
    let handle = self.start(command)?;
    let receipt = handle.outcome_within(self.timeout).await?;

    Ok(CreateInvoiceResponse {
      submission_id: receipt.submission_id,
      notification: Notification::invoice_created(&receipt),
      redirect_to: Route::InvoicingList,
    })
  }
}

fn build_draft(command: CreateInvoiceCommand) -> Result<InvoiceDraft, InvoiceError> {
  let currency = match command.currency.as_deref().map(str::trim) {
    None | Some("") => Currency::default(),
    Some(code) => Currency::from_str(code)?,
  };

  let draft = InvoiceDraft::new(
    ClientName::new(command.client_name)?,
    command.client_email,
    PropertyAddress::parse_optional(command.property_address)?,
    Money::new(command.amount, currency)?,
    command
      .issue_date
      .unwrap_or_else(|| Utc::now().date_naive()),
    command.due_date,
    InvoiceNotes::parse_optional(command.notes)?,
  )?;

  Ok(draft)
}
