//! Application layer
//!
//! Use cases that turn page requests into domain calls and shape the results
//! for templates.

pub mod invoice;
pub mod jobs;
pub mod marketplace;
