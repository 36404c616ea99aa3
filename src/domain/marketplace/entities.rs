use serde::Serialize;
use std::str::FromStr;

use super::errors::MarketplaceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaserCategory {
  Lender,
  Insurer,
  Investor,
  Government,
  Analytics,
}

impl PurchaserCategory {
  pub const ALL: [PurchaserCategory; 5] = [
    PurchaserCategory::Lender,
    PurchaserCategory::Insurer,
    PurchaserCategory::Investor,
    PurchaserCategory::Government,
    PurchaserCategory::Analytics,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PurchaserCategory::Lender => "lender",
      PurchaserCategory::Insurer => "insurer",
      PurchaserCategory::Investor => "investor",
      PurchaserCategory::Government => "government",
      PurchaserCategory::Analytics => "analytics",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      PurchaserCategory::Lender => "Lenders",
      PurchaserCategory::Insurer => "Insurers",
      PurchaserCategory::Investor => "Investors",
      PurchaserCategory::Government => "Government",
      PurchaserCategory::Analytics => "Analytics",
    }
  }
}

impl FromStr for PurchaserCategory {
  type Err = MarketplaceError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    PurchaserCategory::ALL
      .into_iter()
      .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| MarketplaceError::InvalidCategory(s.to_string()))
  }
}

/// An organisation that buys valuation data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Purchaser {
  pub slug: String,
  pub name: String,
  pub category: PurchaserCategory,
  pub description: String,
  pub data_interests: Vec<String>,
  pub regions: Vec<String>,
  pub verified: bool,
}

impl Purchaser {
  /// Case-insensitive match on name, description and data interests.
  pub fn matches(&self, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
      return true;
    }
    self.name.to_lowercase().contains(&needle)
      || self.description.to_lowercase().contains(&needle)
      || self
        .data_interests
        .iter()
        .any(|interest| interest.to_lowercase().contains(&needle))
  }
}
