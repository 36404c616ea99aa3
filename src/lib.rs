//! Property valuation dashboard
//!
//! Server-rendered pages for invoicing, valuation jobs and the data
//! marketplace, built on actix-web and tera.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
