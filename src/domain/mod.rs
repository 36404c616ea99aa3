//! Domain layer
//!
//! Entities, value objects and ports of the dashboard. Nothing here knows
//! about HTTP or templates.

pub mod chrome;
pub mod feedback;
pub mod invoice;
pub mod job;
pub mod marketplace;
pub mod skeleton;
