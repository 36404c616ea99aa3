pub mod browse_purchasers;

pub use browse_purchasers::{
  BrowsePurchasersCommand, BrowsePurchasersResponse, BrowsePurchasersUseCase, CategoryFilterDto,
  PurchaserDto,
};
