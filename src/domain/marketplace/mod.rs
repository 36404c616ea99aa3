pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{Purchaser, PurchaserCategory};
pub use errors::MarketplaceError;
pub use ports::PurchaserCatalog;
