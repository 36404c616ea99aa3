use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::application::invoice::CreateInvoiceCommand;
use crate::domain::invoice::{ClientName, Currency, InvoiceNotes, PropertyAddress};

/// HTML forms post empty inputs as `""`.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<String>::deserialize(deserializer)?;
  Ok(value.filter(|s| !s.trim().is_empty()))
}

fn validate_amount(amount: &str) -> Result<(), ValidationError> {
  match Decimal::from_str(amount.trim()) {
    Ok(value) if value > Decimal::ZERO => Ok(()),
    Ok(_) => Err(
      ValidationError::new("amount_not_positive").with_message("Amount must be greater than zero".into()),
    ),
    Err(_) => Err(ValidationError::new("amount_invalid").with_message("Enter an amount such as 500 or 1250.50".into())),
  }
}

fn validate_date(date: &str) -> Result<(), ValidationError> {
  NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
    .map(|_| ())
    .map_err(|_| ValidationError::new("date_invalid").with_message("Enter a date as YYYY-MM-DD".into()))
}

fn validate_currency(code: &str) -> Result<(), ValidationError> {
  Currency::from_str(code)
    .map(|_| ())
    .map_err(|_| ValidationError::new("currency_invalid").with_message("Choose a supported currency".into()))
}

/// Invoice creation form as posted by the browser
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateInvoiceForm {
  #[serde(default)]
  #[validate(length(
    min = 1,
    max = 200,
    message = "Client name is required (up to 200 characters)"
  ))]
  pub client_name: String,

  #[serde(default, deserialize_with = "empty_string_as_none")]
  #[validate(email(message = "Enter a valid email address"))]
  pub client_email: Option<String>,

  #[serde(default, deserialize_with = "empty_string_as_none")]
  #[validate(length(max = 300, message = "Property address cannot exceed 300 characters"))]
  pub property_address: Option<String>,

  #[serde(default)]
  #[validate(custom(function = "validate_amount"))]
  pub amount: String,

  #[serde(default, deserialize_with = "empty_string_as_none")]
  #[validate(custom(function = "validate_currency"))]
  pub currency: Option<String>,

  #[serde(default, deserialize_with = "empty_string_as_none")]
  #[validate(custom(function = "validate_date"))]
  pub issue_date: Option<String>,

  #[serde(default, deserialize_with = "empty_string_as_none")]
  #[validate(custom(function = "validate_date"))]
  pub due_date: Option<String>,

  #[serde(default, deserialize_with = "empty_string_as_none")]
  #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
  pub notes: Option<String>,
}

impl CreateInvoiceForm {
  /// Blank form with today's issue date.
  pub fn blank(today: NaiveDate) -> Self {
    Self {
      currency: Some(Currency::default().as_str().to_string()),
      issue_date: Some(today.format("%Y-%m-%d").to_string()),
      ..Default::default()
    }
  }

  /// Convert a form that passed `validate()` into a use case command.
  pub fn to_command(&self) -> Result<CreateInvoiceCommand, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let amount = Decimal::from_str(self.amount.trim()).unwrap_or_else(|_| {
      errors.add("amount", ValidationError::new("amount_invalid"));
      Decimal::ZERO
    });
    let issue_date = parse_optional_date(self.issue_date.as_deref(), "issue_date", &mut errors);
    let due_date = parse_optional_date(self.due_date.as_deref(), "due_date", &mut errors);

    if !errors.is_empty() {
      return Err(errors);
    }

    Ok(CreateInvoiceCommand {
      client_name: self.client_name.clone(),
      client_email: self.client_email.clone(),
      property_address: self.property_address.clone(),
      amount,
      currency: self.currency.clone(),
      issue_date,
      due_date,
      notes: self.notes.clone(),
    })
  }
}

fn parse_optional_date(
  value: Option<&str>,
  field: &'static str,
  errors: &mut ValidationErrors,
) -> Option<NaiveDate> {
  let value = value?;
  match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
    Ok(date) => Some(date),
    Err(_) => {
      errors.add(field, ValidationError::new("date_invalid"));
      None
    }
  }
}

/// First message per field, keyed by form input name.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, String> {
  errors
    .field_errors()
    .into_iter()
    .filter_map(|(field, errors)| {
      errors.first().map(|error| {
        let message = error
          .message
          .as_ref()
          .map(|m| m.to_string())
          .unwrap_or_else(|| format!("Invalid value for {}", field.replace('_', " ")));
        (field.to_string(), message)
      })
    })
    .collect()
}

/// Form input a domain validation error belongs to.
pub fn field_for_error(error: &crate::domain::invoice::ValueObjectError) -> &'static str {
  use crate::domain::invoice::ValueObjectError as E;
  match error {
    E::InvalidClientName(_) => "client_name",
    E::InvalidCurrency(_) => "currency",
    E::InvalidAmount(_) => "amount",
    E::InvalidPropertyAddress(_) => "property_address",
    E::InvalidNotes(_) => "notes",
    E::InvalidDueDate(_) => "due_date",
    E::InvalidStatus(_) => "status",
  }
}

/// Option lists for the invoice form
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceFormOptions {
  pub currencies: Vec<&'static str>,
  pub client_name_max: usize,
  pub property_address_max: usize,
  pub notes_max: usize,
}

impl Default for InvoiceFormOptions {
  fn default() -> Self {
    Self {
      currencies: Currency::ALL.iter().map(Currency::as_str).collect(),
      client_name_max: ClientName::MAX_LENGTH,
      property_address_max: PropertyAddress::MAX_LENGTH,
      notes_max: InvoiceNotes::MAX_LENGTH,
    }
  }
}

/// `?status=` filter on list pages and fragments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusQuery {
  #[serde(default, deserialize_with = "empty_string_as_none")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
}

impl StatusQuery {
  /// Parsed filter; blank means unfiltered.
  pub fn parse<S: FromStr>(&self) -> Result<Option<S>, S::Err> {
    match self.status.as_deref().map(str::trim) {
      None | Some("") => Ok(None),
      Some(status) => status.parse().map(Some),
    }
  }
}

/// Marketplace filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketplaceQuery {
  #[serde(default, deserialize_with = "empty_string_as_none")]
  pub category: Option<String>,
  #[serde(default, deserialize_with = "empty_string_as_none")]
  pub q: Option<String>,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  fn form() -> CreateInvoiceForm {
    CreateInvoiceForm {
      client_name: "Acme Co".to_string(),
      amount: "500".to_string(),
      ..Default::default()
    }
  }

  #[test]
  fn test_minimal_form_is_valid() {
    let form = form();
    assert!(form.validate().is_ok());

    let command = form.to_command().unwrap();
    assert_eq!(command.client_name, "Acme Co");
    assert_eq!(command.amount, dec!(500));
    assert_eq!(command.issue_date, None);
  }

  #[test]
  fn test_invalid_fields_are_reported_by_name() {
    let form = CreateInvoiceForm {
      client_name: String::new(),
      client_email: Some("not-an-email".to_string()),
      amount: "abc".to_string(),
      due_date: Some("31/12/2026".to_string()),
      ..Default::default()
    };

    let errors = field_errors(&form.validate().unwrap_err());
    assert_eq!(
      errors.keys().map(String::as_str).collect::<Vec<_>>(),
      ["amount", "client_email", "client_name", "due_date"]
    );
    assert_eq!(errors["client_email"], "Enter a valid email address");
  }

  #[test]
  fn test_zero_amount_is_rejected() {
    let form = CreateInvoiceForm {
      amount: "0".to_string(),
      ..form()
    };
    let errors = field_errors(&form.validate().unwrap_err());
    assert_eq!(errors["amount"], "Amount must be greater than zero");
  }

  #[test]
  fn test_empty_inputs_deserialize_as_none() {
    let form: CreateInvoiceForm = serde_json::from_value(serde_json::json!({
      "client_name": "Acme Co",
      "client_email": "",
      "amount": "500",
      "due_date": "  ",
    }))
    .unwrap();

    assert_eq!(form.client_email, None);
    assert_eq!(form.due_date, None);
    assert!(form.validate().is_ok());
  }

  #[test]
  fn test_blank_form_defaults() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let form = CreateInvoiceForm::blank(today);
    assert_eq!(form.currency.as_deref(), Some("USD"));
    assert_eq!(form.issue_date.as_deref(), Some("2026-10-16"));
  }

  #[test]
  fn test_status_query_parse() {
    use crate::domain::invoice::InvoiceStatus;

    let query = StatusQuery { status: None };
    assert_eq!(query.parse::<InvoiceStatus>().unwrap(), None);

    let query = StatusQuery {
      status: Some(" paid ".to_string()),
    };
    assert_eq!(query.parse::<InvoiceStatus>().unwrap(), Some(InvoiceStatus::Paid));

    let query = StatusQuery {
      status: Some("bogus".to_string()),
    };
    assert!(query.parse::<InvoiceStatus>().is_err());
  }
}
