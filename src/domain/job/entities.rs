use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use super::errors::JobError;
use crate::domain::invoice::{Currency, format_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
  Scheduled,
  InProgress,
  InReview,
  Completed,
}

impl JobStatus {
  pub const ALL: [JobStatus; 4] = [
    JobStatus::Scheduled,
    JobStatus::InProgress,
    JobStatus::InReview,
    JobStatus::Completed,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      JobStatus::Scheduled => "scheduled",
      JobStatus::InProgress => "in_progress",
      JobStatus::InReview => "in_review",
      JobStatus::Completed => "completed",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      JobStatus::Scheduled => "Scheduled",
      JobStatus::InProgress => "In progress",
      JobStatus::InReview => "In review",
      JobStatus::Completed => "Completed",
    }
  }
}

impl FromStr for JobStatus {
  type Err = JobError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().replace('-', "_").as_str() {
      "scheduled" => Ok(JobStatus::Scheduled),
      "in_progress" => Ok(JobStatus::InProgress),
      "in_review" => Ok(JobStatus::InReview),
      "completed" => Ok(JobStatus::Completed),
      _ => Err(JobError::InvalidStatus(s.to_string())),
    }
  }
}

/// A property valuation assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValuationJob {
  pub reference: String,
  pub property_address: String,
  pub client_name: String,
  pub valuer: String,
  pub status: JobStatus,
  pub inspection_date: NaiveDate,
  pub fee: Decimal,
  pub currency: Currency,
}

impl ValuationJob {
  pub fn formatted_fee(&self) -> String {
    format_amount(self.fee, self.currency)
  }

  /// Initials shown in the avatar bubble.
  pub fn valuer_initials(&self) -> String {
    self
      .valuer
      .split_whitespace()
      .filter_map(|part| part.chars().next())
      .take(2)
      .collect::<String>()
      .to_uppercase()
  }
}
