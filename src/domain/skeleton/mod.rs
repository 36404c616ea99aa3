//! Loading placeholders shown while list content is fetched.
//!
//! Layouts are plain values with no data dependency; templates turn them into
//! pulsing blocks.

pub mod entities;
pub mod layouts;

pub use entities::{
  BlockShape, Dimension, SkeletonBlock, SkeletonCard, SkeletonLayout, SkeletonRow,
};
pub use layouts::{JOBS_LIST_ROWS, invoicing_list, jobs_list};
