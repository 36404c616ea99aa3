//! Infrastructure layer
//!
//! Configuration loading and the adapters behind the domain ports.

pub mod config;
pub mod mock_data;
pub mod submission;
