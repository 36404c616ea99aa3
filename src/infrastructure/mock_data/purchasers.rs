use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::marketplace::{
  MarketplaceError, Purchaser, PurchaserCatalog, PurchaserCategory,
};

pub struct MockPurchaserCatalog {
  purchasers: Arc<Vec<Purchaser>>,
}

fn purchaser(
  slug: &str,
  name: &str,
  category: PurchaserCategory,
  description: &str,
  data_interests: &[&str],
  regions: &[&str],
  verified: bool,
) -> Purchaser {
  Purchaser {
    slug: slug.to_string(),
    name: name.to_string(),
    category,
    description: description.to_string(),
    data_interests: data_interests.iter().map(|s| s.to_string()).collect(),
    regions: regions.iter().map(|s| s.to_string()).collect(),
    verified,
  }
}

impl MockPurchaserCatalog {
  pub fn new(purchasers: Vec<Purchaser>) -> Self {
    Self {
      purchasers: Arc::new(purchasers),
    }
  }

  pub fn seeded() -> Self {
    Self::new(vec![
      purchaser(
        "harbour-bank",
        "Harbour Bank",
        PurchaserCategory::Lender,
        "Residential mortgage lender sourcing independent valuations for loan approvals.",
        &["Comparable sales", "Rental yields", "Settlement values"],
        &["NSW", "VIC"],
        true,
      ),
      purchaser(
        "kestrel-insurance",
        "Kestrel Insurance",
        PurchaserCategory::Insurer,
        "Home and contents insurer pricing rebuild costs and hazard exposure.",
        &["Rebuild cost estimates", "Flood risk overlays"],
        &["QLD", "NZ"],
        true,
      ),
      purchaser(
        "southern-cross-mutual",
        "Southern Cross Mutual",
        PurchaserCategory::Insurer,
        "Mutual insurer focused on regional and rural properties.",
        &["Bushfire exposure", "Land size"],
        &["WA", "SA"],
        false,
      ),
      purchaser(
        "atlas-capital",
        "Atlas Capital Partners",
        PurchaserCategory::Investor,
        "Build-to-rent fund screening metropolitan acquisition targets.",
        &["Rental yields", "Vacancy rates", "Zoning changes"],
        &["NSW", "VIC", "QLD"],
        true,
      ),
      purchaser(
        "northwind-trust",
        "Northwind Property Trust",
        PurchaserCategory::Investor,
        "Listed trust benchmarking commercial office valuations.",
        &["Capitalisation rates", "Lease expiries"],
        &["VIC"],
        false,
      ),
      purchaser(
        "state-revenue-office",
        "State Revenue Office",
        PurchaserCategory::Government,
        "Land tax assessments and statutory valuation audits.",
        &["Site values", "Statutory valuations"],
        &["VIC"],
        true,
      ),
      purchaser(
        "gridline-analytics",
        "Gridline Analytics",
        PurchaserCategory::Analytics,
        "Automated valuation model vendor training on verified inspection data.",
        &["Inspection reports", "Comparable sales", "Flood risk overlays"],
        &["AU", "NZ"],
        false,
      ),
    ])
  }
}

#[async_trait]
impl PurchaserCatalog for MockPurchaserCatalog {
  async fn all(&self) -> Result<Vec<Purchaser>, MarketplaceError> {
    Ok(self.purchasers.as_ref().clone())
  }
}
