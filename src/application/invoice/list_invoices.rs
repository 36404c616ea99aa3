use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::invoice::{
  Currency, InvoiceError, InvoiceListing, InvoiceStatus, InvoiceSummary, format_amount,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListInvoicesCommand {
  pub status_filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceListItemDto {
  pub invoice_number: String,
  pub client_name: String,
  pub property_address: String,
  pub amount: String,
  pub currency: String,
  pub status: String,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct OutstandingTotalDto {
  pub currency: String,
  pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<InvoiceListItemDto>,
  pub total_count: usize,
  pub outstanding_count: usize,
  pub paid_count: usize,
  pub outstanding: Vec<OutstandingTotalDto>,
  pub status_filter: Option<String>,
}

pub struct ListInvoicesUseCase {
  listing: Arc<dyn InvoiceListing>,
}

impl ListInvoicesUseCase {
  pub fn new(listing: Arc<dyn InvoiceListing>) -> Self {
    Self { listing }
  }

  pub async fn execute(
    &self,
    command: ListInvoicesCommand,
  ) -> Result<ListInvoicesResponse, InvoiceError> {
    let status_filter = match command.status_filter.as_deref().map(str::trim) {
      None | Some("") => None,
      Some(status) => Some(InvoiceStatus::from_str(status)?),
    };

    let mut invoices = self.listing.list().await?;
    invoices.sort_by(|a, b| {
      b.issue_date
        .cmp(&a.issue_date)
        .then_with(|| b.invoice_number.cmp(&a.invoice_number))
    });

    // Stat cards summarise the whole ledger, not the filtered view.
    let total_count = invoices.len();
    let outstanding_count = invoices.iter().filter(|i| i.status.is_outstanding()).count();
    let paid_count = invoices
      .iter()
      .filter(|i| i.status == InvoiceStatus::Paid)
      .count();

    let mut totals: BTreeMap<&'static str, (Currency, Decimal)> = BTreeMap::new();
    for invoice in invoices.iter().filter(|i| i.status.is_outstanding()) {
      let entry = totals
        .entry(invoice.currency.as_str())
        .or_insert((invoice.currency, Decimal::ZERO));
      entry.1 += invoice.amount;
    }
    let outstanding = totals
      .into_values()
      .map(|(currency, amount)| OutstandingTotalDto {
        currency: currency.as_str().to_string(),
        amount: format_amount(amount, currency),
      })
      .collect();

    let invoices = invoices
      .into_iter()
      .filter(|i| status_filter.is_none_or(|status| i.status == status))
      .map(to_dto)
      .collect();

    Ok(ListInvoicesResponse {
      invoices,
      total_count,
      outstanding_count,
      paid_count,
      outstanding,
      status_filter: status_filter.map(|s| s.as_str().to_string()),
    })
  }
}

fn to_dto(invoice: InvoiceSummary) -> InvoiceListItemDto {
  InvoiceListItemDto {
    amount: invoice.formatted_amount(),
    currency: invoice.currency.as_str().to_string(),
    status: invoice.status.as_str().to_string(),
    invoice_number: invoice.invoice_number,
    client_name: invoice.client_name,
    property_address: invoice.property_address,
    issue_date: invoice.issue_date,
    due_date: invoice.due_date,
  }
}
