//! In-memory listing data for the dashboard pages.
//!
//! There is no backing store; each adapter serves an immutable seed set.

pub mod invoices;
pub mod jobs;
pub mod purchasers;

pub use invoices::MockInvoiceListing;
pub use jobs::MockJobListing;
pub use purchasers::MockPurchaserCatalog;

use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
