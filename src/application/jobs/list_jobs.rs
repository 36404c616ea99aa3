use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::job::{JobError, JobListing, JobStatus, ValuationJob};

#[derive(Debug, Default, Deserialize)]
pub struct ListJobsCommand {
  pub status_filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobDto {
  pub reference: String,
  pub property_address: String,
  pub client_name: String,
  pub valuer: String,
  pub valuer_initials: String,
  pub status: String,
  pub status_label: String,
  pub inspection_date: NaiveDate,
  pub fee: String,
}

#[derive(Debug, Serialize)]
pub struct JobStatusCountDto {
  pub status: String,
  pub label: String,
  pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ListJobsResponse {
  pub jobs: Vec<JobDto>,
  pub status_counts: Vec<JobStatusCountDto>,
  pub status_filter: Option<String>,
}

pub struct ListJobsUseCase {
  listing: Arc<dyn JobListing>,
}

impl ListJobsUseCase {
  pub fn new(listing: Arc<dyn JobListing>) -> Self {
    Self { listing }
  }

  pub async fn execute(&self, command: ListJobsCommand) -> Result<ListJobsResponse, JobError> {
    let status_filter = match command.status_filter.as_deref().map(str::trim) {
      None | Some("") => None,
      Some(status) => Some(JobStatus::from_str(status)?),
    };

    let mut jobs = self.listing.list().await?;
    jobs.sort_by(|a, b| {
      a.inspection_date
        .cmp(&b.inspection_date)
        .then_with(|| a.reference.cmp(&b.reference))
    });

    let status_counts = JobStatus::ALL
      .iter()
      .map(|status| JobStatusCountDto {
        status: status.as_str().to_string(),
        label: status.label().to_string(),
        count: jobs.iter().filter(|job| job.status == *status).count(),
      })
      .collect();

    let jobs = jobs
      .into_iter()
      .filter(|job| status_filter.is_none_or(|status| job.status == status))
      .map(to_dto)
      .collect();

    Ok(ListJobsResponse {
      jobs,
      status_counts,
      status_filter: status_filter.map(|s| s.as_str().to_string()),
    })
  }
}

fn to_dto(job: ValuationJob) -> JobDto {
  JobDto {
    valuer_initials: job.valuer_initials(),
    fee: job.formatted_fee(),
    status: job.status.as_str().to_string(),
    status_label: job.status.label().to_string(),
    reference: job.reference,
    property_address: job.property_address,
    client_name: job.client_name,
    valuer: job.valuer,
    inspection_date: job.inspection_date,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::mock_data::MockJobListing;

  #[tokio::test]
  async fn test_jobs_sorted_by_inspection_date() {
    let use_case = ListJobsUseCase::new(Arc::new(MockJobListing::seeded()));
    let response = use_case.execute(ListJobsCommand::default()).await.unwrap();

    assert!(!response.jobs.is_empty());
    assert!(
      response
        .jobs
        .windows(2)
        .all(|pair| pair[0].inspection_date <= pair[1].inspection_date)
    );
    let counted: usize = response.status_counts.iter().map(|c| c.count).sum();
    assert_eq!(counted, response.jobs.len());
  }

  #[tokio::test]
  async fn test_status_filter() {
    let use_case = ListJobsUseCase::new(Arc::new(MockJobListing::seeded()));
    let response = use_case
      .execute(ListJobsCommand {
        status_filter: Some("in-review".to_string()),
      })
      .await
      .unwrap();

    assert!(response.jobs.iter().all(|job| job.status == "in_review"));
    assert_eq!(response.status_filter.as_deref(), Some("in_review"));

    let invalid = use_case
      .execute(ListJobsCommand {
        status_filter: Some("lost".to_string()),
      })
      .await;
    assert!(matches!(invalid, Err(JobError::InvalidStatus(_))));
  }
}
