use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::date;
use crate::domain::invoice::{
  Currency, InvoiceError, InvoiceListing, InvoiceStatus, InvoiceSummary,
};

pub struct MockInvoiceListing {
  invoices: Arc<Vec<InvoiceSummary>>,
}

impl MockInvoiceListing {
  pub fn new(invoices: Vec<InvoiceSummary>) -> Self {
    Self {
      invoices: Arc::new(invoices),
    }
  }

  pub fn seeded() -> Self {
    Self::new(vec![
      InvoiceSummary {
        invoice_number: "INV-2026-014".to_string(),
        client_name: "Harbour Bank".to_string(),
        property_address: "14 Wharf Street, Pyrmont".to_string(),
        amount: dec!(1850.00),
        currency: Currency::AUD,
        status: InvoiceStatus::Sent,
        issue_date: date(2026, 9, 28),
        due_date: date(2026, 10, 28),
      },
      InvoiceSummary {
        invoice_number: "INV-2026-013".to_string(),
        client_name: "Northwind Property Trust".to_string(),
        property_address: "220 Collins Street, Melbourne".to_string(),
        amount: dec!(4200.00),
        currency: Currency::AUD,
        status: InvoiceStatus::Overdue,
        issue_date: date(2026, 8, 30),
        due_date: date(2026, 9, 29),
      },
      InvoiceSummary {
        invoice_number: "INV-2026-012".to_string(),
        client_name: "Acme Co".to_string(),
        property_address: "3 Orchard Lane, Richmond".to_string(),
        amount: dec!(500.00),
        currency: Currency::AUD,
        status: InvoiceStatus::Paid,
        issue_date: date(2026, 8, 21),
        due_date: date(2026, 9, 20),
      },
      InvoiceSummary {
        invoice_number: "INV-2026-011".to_string(),
        client_name: "Kestrel Insurance".to_string(),
        property_address: "88 Riverside Drive, Hamilton".to_string(),
        amount: dec!(975.50),
        currency: Currency::NZD,
        status: InvoiceStatus::Sent,
        issue_date: date(2026, 8, 14),
        due_date: date(2026, 9, 13),
      },
      InvoiceSummary {
        invoice_number: "INV-2026-010".to_string(),
        client_name: "Greenfield Estates".to_string(),
        property_address: "Lot 7, Meadow Rise, Ballarat".to_string(),
        amount: dec!(2300.00),
        currency: Currency::AUD,
        status: InvoiceStatus::Paid,
        issue_date: date(2026, 7, 30),
        due_date: date(2026, 8, 29),
      },
      InvoiceSummary {
        invoice_number: "INV-2026-009".to_string(),
        client_name: "Atlas Capital Partners".to_string(),
        property_address: "1 Market Square, Auckland".to_string(),
        amount: dec!(3100.00),
        currency: Currency::NZD,
        status: InvoiceStatus::Draft,
        issue_date: date(2026, 7, 18),
        due_date: date(2026, 8, 17),
      },
    ])
  }
}

#[async_trait]
impl InvoiceListing for MockInvoiceListing {
  async fn list(&self) -> Result<Vec<InvoiceSummary>, InvoiceError> {
    Ok(self.invoices.as_ref().clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_seeded_listing_is_stable() {
    let listing = MockInvoiceListing::seeded();
    let first = listing.list().await.unwrap();
    let second = listing.list().await.unwrap();

    assert_eq!(first, second);
    assert!(first.iter().all(|i| i.due_date >= i.issue_date));
  }
}
