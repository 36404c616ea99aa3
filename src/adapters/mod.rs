//! Adapters layer
//!
//! The HTTP surface: handlers, templates and middleware.

pub mod http;
