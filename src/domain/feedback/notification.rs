use serde::{Deserialize, Serialize};

use crate::domain::invoice::{InvoiceError, SubmissionReceipt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
  Success,
  Error,
}

/// A toast shown to the user after an action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
  pub title: String,
  pub description: String,
  pub variant: NotificationVariant,
}

impl Notification {
  pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      variant: NotificationVariant::Success,
    }
  }

  pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      variant: NotificationVariant::Error,
    }
  }

  pub fn invoice_created(receipt: &SubmissionReceipt) -> Self {
    Self::success(
      "Invoice created",
      format!(
        "Invoice for {} has been successfully created.",
        receipt.client_name
      ),
    )
  }

  /// The form was rejected before anything was submitted.
  pub fn form_invalid() -> Self {
    Self::error(
      "Invoice not created",
      "Please correct the highlighted fields and try again.",
    )
  }

  pub fn invoice_not_created(error: &InvoiceError) -> Self {
    let description = match error {
      InvoiceError::Validation(_) => return Self::form_invalid(),
      InvoiceError::SubmissionTimedOut(_) => {
        "The billing service did not respond in time. Please try again."
      }
      _ => "Something went wrong while creating the invoice. Please try again.",
    };
    Self::error("Invoice not created", description)
  }
}
