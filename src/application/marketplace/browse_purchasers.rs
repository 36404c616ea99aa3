use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::marketplace::{
  MarketplaceError, Purchaser, PurchaserCatalog, PurchaserCategory,
};

#[derive(Debug, Default, Deserialize)]
pub struct BrowsePurchasersCommand {
  pub category: Option<String>,
  pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PurchaserDto {
  pub slug: String,
  pub name: String,
  pub category: String,
  pub category_label: String,
  pub description: String,
  pub data_interests: Vec<String>,
  pub regions: Vec<String>,
  pub verified: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryFilterDto {
  pub value: String,
  pub label: String,
  pub count: usize,
  pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct BrowsePurchasersResponse {
  pub purchasers: Vec<PurchaserDto>,
  pub categories: Vec<CategoryFilterDto>,
  pub query: String,
  pub total: usize,
}

pub struct BrowsePurchasersUseCase {
  catalog: Arc<dyn PurchaserCatalog>,
}

impl BrowsePurchasersUseCase {
  pub fn new(catalog: Arc<dyn PurchaserCatalog>) -> Self {
    Self { catalog }
  }

  pub async fn execute(
    &self,
    command: BrowsePurchasersCommand,
  ) -> Result<BrowsePurchasersResponse, MarketplaceError> {
    let category = match command.category.as_deref().map(str::trim) {
      None | Some("") => None,
      Some(value) => Some(PurchaserCategory::from_str(value)?),
    };
    let query = command.query.unwrap_or_default().trim().to_string();

    let mut purchasers = self.catalog.all().await?;
    purchasers.sort_by(|a, b| {
      b.verified
        .cmp(&a.verified)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    let total = purchasers.len();

    // Category counts reflect the search but not the category filter.
    let searched: Vec<Purchaser> = purchasers
      .into_iter()
      .filter(|p| p.matches(&query))
      .collect();

    let categories = PurchaserCategory::ALL
      .iter()
      .map(|c| CategoryFilterDto {
        value: c.as_str().to_string(),
        label: c.label().to_string(),
        count: searched.iter().filter(|p| p.category == *c).count(),
        active: category == Some(*c),
      })
      .collect();

    let purchasers = searched
      .into_iter()
      .filter(|p| category.is_none_or(|c| p.category == c))
      .map(to_dto)
      .collect();

    Ok(BrowsePurchasersResponse {
      purchasers,
      categories,
      query,
      total,
    })
  }
}

fn to_dto(purchaser: Purchaser) -> PurchaserDto {
  PurchaserDto {
    category: purchaser.category.as_str().to_string(),
    category_label: purchaser.category.label().to_string(),
    slug: purchaser.slug,
    name: purchaser.name,
    description: purchaser.description,
    data_interests: purchaser.data_interests,
    regions: purchaser.regions,
    verified: purchaser.verified,
  }
}
