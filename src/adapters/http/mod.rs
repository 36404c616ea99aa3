pub mod dtos;
pub mod errors;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod templates;

// Re-export commonly used types
pub use dtos::{CreateInvoiceForm, ErrorResponse, MarketplaceQuery, StatusQuery};
pub use errors::ApiError;
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{WebRouteDependencies, configure_web_routes};
pub use templates::TemplateEngine;
