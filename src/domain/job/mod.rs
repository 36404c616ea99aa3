pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{JobStatus, ValuationJob};
pub use errors::JobError;
pub use ports::JobListing;
