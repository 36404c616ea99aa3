use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::value_objects::{
  ClientName, Currency, InvoiceNotes, InvoiceStatus, Money, PropertyAddress, ValueObjectError,
  format_amount,
};

/// A validated invoice draft, ready to be handed to a submission task.
///
/// Drafts are transient: one is built per form submission and dropped once
/// the submission outcome is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
  pub client_name: ClientName,
  pub client_email: Option<String>,
  pub property_address: Option<PropertyAddress>,
  pub total: Money,
  pub issue_date: NaiveDate,
  pub due_date: Option<NaiveDate>,
  pub notes: Option<InvoiceNotes>,
}

impl InvoiceDraft {
  pub fn new(
    client_name: ClientName,
    client_email: Option<String>,
    property_address: Option<PropertyAddress>,
    total: Money,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    notes: Option<InvoiceNotes>,
  ) -> Result<Self, ValueObjectError> {
    if let Some(due) = due_date {
      if due < issue_date {
        return Err(ValueObjectError::InvalidDueDate(
          "Due date cannot be before the issue date".to_string(),
        ));
      }
    }

    let client_email = client_email
      .map(|email| email.trim().to_string())
      .filter(|email| !email.is_empty());

    Ok(Self {
      client_name,
      client_email,
      property_address,
      total,
      issue_date,
      due_date,
      notes,
    })
  }
}

/// Acknowledgement returned by a submitter once a draft has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
  pub submission_id: Uuid,
  pub client_name: String,
  pub amount: Decimal,
  pub currency: Currency,
  pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
  pub fn for_draft(draft: &InvoiceDraft) -> Self {
    Self {
      submission_id: Uuid::new_v4(),
      client_name: draft.client_name.value().to_string(),
      amount: draft.total.amount,
      currency: draft.total.currency,
      submitted_at: Utc::now(),
    }
  }
}

/// Row of the invoicing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
  pub invoice_number: String,
  pub client_name: String,
  pub property_address: String,
  pub amount: Decimal,
  pub currency: Currency,
  pub status: InvoiceStatus,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
}

impl InvoiceSummary {
  pub fn formatted_amount(&self) -> String {
    format_amount(self.amount, self.currency)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn draft(due_date: Option<NaiveDate>) -> Result<InvoiceDraft, ValueObjectError> {
    InvoiceDraft::new(
      ClientName::new("Acme Co").unwrap(),
      Some("  billing@acme.test ".to_string()),
      None,
      Money::new(dec!(500), Currency::USD).unwrap(),
      date(2026, 3, 1),
      due_date,
      None,
    )
  }

  #[test]
  fn test_due_date_not_before_issue_date() {
    assert!(draft(Some(date(2026, 2, 28))).is_err());
    assert!(draft(Some(date(2026, 3, 1))).is_ok());
    assert!(draft(None).is_ok());
  }

  #[test]
  fn test_email_is_trimmed() {
    let draft = draft(None).unwrap();
    assert_eq!(draft.client_email.as_deref(), Some("billing@acme.test"));
  }

  #[test]
  fn test_receipt_copies_draft_fields() {
    let draft = draft(None).unwrap();
    let first = SubmissionReceipt::for_draft(&draft);
    let second = SubmissionReceipt::for_draft(&draft);

    assert_eq!(first.client_name, "Acme Co");
    assert_eq!(first.amount, dec!(500));
    assert_eq!(first.currency, Currency::USD);
    assert_ne!(first.submission_id, second.submission_id);
  }
}
