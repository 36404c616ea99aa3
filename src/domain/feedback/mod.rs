//! User-facing outcomes of actions: toasts and navigation targets.

pub mod notification;
pub mod route;

pub use notification::{Notification, NotificationVariant};
pub use route::{NavItem, Route, navigation};
