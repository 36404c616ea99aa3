use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::Arc;

use super::date;
use crate::domain::invoice::Currency;
use crate::domain::job::{JobError, JobListing, JobStatus, ValuationJob};

pub struct MockJobListing {
  jobs: Arc<Vec<ValuationJob>>,
}

impl MockJobListing {
  pub fn new(jobs: Vec<ValuationJob>) -> Self {
    Self {
      jobs: Arc::new(jobs),
    }
  }

  pub fn seeded() -> Self {
    let job = |reference: &str,
               address: &str,
               client: &str,
               valuer: &str,
               status: JobStatus,
               (y, m, d): (i32, u32, u32)| ValuationJob {
      reference: reference.to_string(),
      property_address: address.to_string(),
      client_name: client.to_string(),
      valuer: valuer.to_string(),
      status,
      inspection_date: date(y, m, d),
      fee: dec!(650),
      currency: Currency::AUD,
    };

    let mut jobs = vec![
      job(
        "VAL-3108",
        "14 Wharf Street, Pyrmont NSW",
        "Harbour Bank",
        "Priya Raman",
        JobStatus::Completed,
        (2026, 9, 24),
      ),
      job(
        "VAL-3112",
        "220 Collins Street, Melbourne VIC",
        "Northwind Property Trust",
        "Tom Okafor",
        JobStatus::InReview,
        (2026, 10, 6),
      ),
      job(
        "VAL-3115",
        "3 Orchard Lane, Richmond VIC",
        "Acme Co",
        "Priya Raman",
        JobStatus::InProgress,
        (2026, 10, 14),
      ),
      job(
        "VAL-3117",
        "9 Beacon Road, Fremantle WA",
        "Kestrel Insurance",
        "Lena Fischer",
        JobStatus::Scheduled,
        (2026, 10, 21),
      ),
      job(
        "VAL-3118",
        "Lot 7, Meadow Rise, Ballarat VIC",
        "Greenfield Estates",
        "Tom Okafor",
        JobStatus::Scheduled,
        (2026, 10, 23),
      ),
      job(
        "VAL-3121",
        "51 Kingfisher Court, Noosa QLD",
        "Atlas Capital Partners",
        "Lena Fischer",
        JobStatus::InReview,
        (2026, 10, 9),
      ),
    ];

    // Commercial assignments carry a higher fee.
    for commercial in jobs.iter_mut().filter(|j| j.reference == "VAL-3112") {
      commercial.fee = dec!(2400);
    }

    Self::new(jobs)
  }
}

#[async_trait]
impl JobListing for MockJobListing {
  async fn list(&self) -> Result<Vec<ValuationJob>, JobError> {
    Ok(self.jobs.as_ref().clone())
  }
}
