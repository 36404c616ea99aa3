use serde::Serialize;
use std::fmt;

/// Fixed navigation destinations of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Route {
  InvoicingList,
  NewInvoice,
  JobsList,
  Marketplace,
}

impl Route {
  /// Entries of the navigation bar, in display order.
  pub const SECTIONS: [Route; 3] = [Route::InvoicingList, Route::JobsList, Route::Marketplace];

  pub fn path(&self) -> &'static str {
    match self {
      Route::InvoicingList => "/invoicing",
      Route::NewInvoice => "/invoicing/new",
      Route::JobsList => "/jobs",
      Route::Marketplace => "/marketplace",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Route::InvoicingList => "Invoicing",
      Route::NewInvoice => "New invoice",
      Route::JobsList => "Jobs",
      Route::Marketplace => "Data marketplace",
    }
  }

  /// Navigation section this route belongs to.
  pub fn section(&self) -> Route {
    match self {
      Route::NewInvoice => Route::InvoicingList,
      other => *other,
    }
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.path())
  }
}

impl From<Route> for String {
  fn from(route: Route) -> Self {
    route.path().to_string()
  }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
  pub label: &'static str,
  pub href: &'static str,
  pub active: bool,
}

pub fn navigation(current: Route) -> Vec<NavItem> {
  let section = current.section();
  Route::SECTIONS
    .iter()
    .map(|route| NavItem {
      label: route.label(),
      href: route.path(),
      active: *route == section,
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_paths() {
    assert_eq!(Route::InvoicingList.path(), "/invoicing");
    assert_eq!(Route::NewInvoice.to_string(), "/invoicing/new");
    assert_eq!(
      serde_json::to_value(Route::JobsList).unwrap(),
      serde_json::json!("/jobs")
    );
  }

  #[test]
  fn test_navigation_marks_section_active() {
    let items = navigation(Route::NewInvoice);
    assert_eq!(items.len(), 3);
    let active: Vec<_> = items.iter().filter(|i| i.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].href, "/invoicing");
  }
}
