use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid client name: {0}")]
  InvalidClientName(String),
  #[error("Invalid currency code: {0}")]
  InvalidCurrency(String),
  #[error("Invalid amount: {0}")]
  InvalidAmount(String),
  #[error("Invalid property address: {0}")]
  InvalidPropertyAddress(String),
  #[error("Invalid notes: {0}")]
  InvalidNotes(String),
  #[error("Invalid due date: {0}")]
  InvalidDueDate(String),
  #[error("Invalid invoice status: {0}")]
  InvalidStatus(String),
}

// Client Name - the party the invoice is addressed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientName(String);

impl ClientName {
  pub const MAX_LENGTH: usize = 200;

  pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidClientName(
        "Client name cannot be empty".to_string(),
      ));
    }
    if trimmed.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::InvalidClientName(format!(
        "Client name cannot exceed {} characters",
        Self::MAX_LENGTH
      )));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for ClientName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Property Address - free text, optional on the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAddress(String);

impl PropertyAddress {
  pub const MAX_LENGTH: usize = 300;

  /// Blank input means "no address" rather than an error.
  pub fn parse_optional(value: Option<String>) -> Result<Option<Self>, ValueObjectError> {
    let Some(value) = value else {
      return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Ok(None);
    }
    if trimmed.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::InvalidPropertyAddress(format!(
        "Property address cannot exceed {} characters",
        Self::MAX_LENGTH
      )));
    }
    Ok(Some(Self(trimmed.to_string())))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for PropertyAddress {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Currency - ISO 4217, limited to the markets the dashboard bills in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
  #[default]
  USD,
  EUR,
  GBP,
  AUD,
  CAD,
  NZD,
}

impl Currency {
  pub const ALL: [Currency; 6] = [
    Currency::USD,
    Currency::EUR,
    Currency::GBP,
    Currency::AUD,
    Currency::CAD,
    Currency::NZD,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Currency::USD => "USD",
      Currency::EUR => "EUR",
      Currency::GBP => "GBP",
      Currency::AUD => "AUD",
      Currency::CAD => "CAD",
      Currency::NZD => "NZD",
    }
  }

  pub fn symbol(&self) -> &'static str {
    match self {
      Currency::USD | Currency::AUD | Currency::CAD | Currency::NZD => "$",
      Currency::EUR => "€",
      Currency::GBP => "£",
    }
  }
}

impl fmt::Display for Currency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Currency {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_uppercase().as_str() {
      "USD" => Ok(Currency::USD),
      "EUR" => Ok(Currency::EUR),
      "GBP" => Ok(Currency::GBP),
      "AUD" => Ok(Currency::AUD),
      "CAD" => Ok(Currency::CAD),
      "NZD" => Ok(Currency::NZD),
      _ => Err(ValueObjectError::InvalidCurrency(format!(
        "Unsupported currency: {}",
        s
      ))),
    }
  }
}

// Money - strictly positive amount with currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
  pub amount: Decimal,
  pub currency: Currency,
}

impl Money {
  pub fn new(amount: Decimal, currency: Currency) -> Result<Self, ValueObjectError> {
    if amount <= Decimal::ZERO {
      return Err(ValueObjectError::InvalidAmount(
        "Amount must be greater than zero".to_string(),
      ));
    }
    if amount.normalize().scale() > 2 {
      return Err(ValueObjectError::InvalidAmount(
        "Amount cannot have more than 2 decimal places".to_string(),
      ));
    }
    Ok(Self { amount, currency })
  }

  /// Amount rounded to cents, e.g. `$1,250.00`.
  pub fn format(&self) -> String {
    format_amount(self.amount, self.currency)
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.format())
  }
}

pub fn format_amount(amount: Decimal, currency: Currency) -> String {
  let rounded = amount.round_dp(2);
  let text = format!("{:.2}", rounded);
  let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
  let (sign, digits) = match whole.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", whole),
  };

  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }

  format!("{}{}{}.{}", sign, currency.symbol(), grouped, cents)
}

// Notes - optional free text printed on the invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceNotes(String);

impl InvoiceNotes {
  pub const MAX_LENGTH: usize = 1000;

  pub fn parse_optional(value: Option<String>) -> Result<Option<Self>, ValueObjectError> {
    let Some(value) = value else {
      return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Ok(None);
    }
    if trimmed.chars().count() > Self::MAX_LENGTH {
      return Err(ValueObjectError::InvalidNotes(format!(
        "Notes cannot exceed {} characters",
        Self::MAX_LENGTH
      )));
    }
    Ok(Some(Self(trimmed.to_string())))
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

// Invoice Status of listed invoices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
  Draft,
  Sent,
  Paid,
  Overdue,
}

impl InvoiceStatus {
  pub const ALL: [InvoiceStatus; 4] = [
    InvoiceStatus::Draft,
    InvoiceStatus::Sent,
    InvoiceStatus::Paid,
    InvoiceStatus::Overdue,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      InvoiceStatus::Draft => "draft",
      InvoiceStatus::Sent => "sent",
      InvoiceStatus::Paid => "paid",
      InvoiceStatus::Overdue => "overdue",
    }
  }

  /// Outstanding invoices still count towards receivables.
  pub fn is_outstanding(&self) -> bool {
    matches!(self, InvoiceStatus::Sent | InvoiceStatus::Overdue)
  }
}

impl FromStr for InvoiceStatus {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "draft" => Ok(InvoiceStatus::Draft),
      "sent" => Ok(InvoiceStatus::Sent),
      "paid" => Ok(InvoiceStatus::Paid),
      "overdue" => Ok(InvoiceStatus::Overdue),
      _ => Err(ValueObjectError::InvalidStatus(format!(
        "Unknown status: {}",
        s
      ))),
    }
  }
}
