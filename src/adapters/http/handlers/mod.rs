pub mod invoices_web;
pub mod jobs_web;
pub mod marketplace_web;
pub mod pages;

use actix_web::{HttpRequest, HttpResponse, cookie::Cookie, http::header};
use serde::Serialize;

use crate::adapters::http::errors::ApiError;
use crate::domain::feedback::Route;

/// Whether the request was issued by htmx
pub fn is_htmx(req: &HttpRequest) -> bool {
  req
    .headers()
    .get("HX-Request")
    .and_then(|h| h.to_str().ok())
    .is_some_and(|value| value == "true")
}

/// Client-side navigation to `route`.
///
/// htmx follows `HX-Redirect` from a 200; plain form posts get a 303.
pub fn navigate(req: &HttpRequest, route: Route, cookie: Option<Cookie<'static>>) -> HttpResponse {
  let mut builder = if is_htmx(req) {
    let mut builder = HttpResponse::Ok();
    builder.insert_header(("HX-Redirect", route.path()));
    builder
  } else {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, route.path()));
    builder
  };

  if let Some(cookie) = cookie {
    builder.cookie(cookie);
  }
  builder.finish()
}

/// URL of a list fragment carrying the page's filters
pub fn fragment_url<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
  let encoded = serde_urlencoded::to_string(query)
    .map_err(|e| ApiError::Internal(format!("Failed to encode query: {}", e)))?;

  if encoded.is_empty() {
    Ok(path.to_string())
  } else {
    Ok(format!("{}?{}", path, encoded))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adapters::http::dtos::StatusQuery;
  use actix_web::test::TestRequest;

  #[test]
  fn test_fragment_url_keeps_filters() {
    assert_eq!(
      fragment_url("/jobs/list", &StatusQuery::default()).unwrap(),
      "/jobs/list"
    );
    let query = StatusQuery {
      status: Some("in_review".to_string()),
    };
    assert_eq!(
      fragment_url("/jobs/list", &query).unwrap(),
      "/jobs/list?status=in_review"
    );
  }

  #[test]
  fn test_navigation_depends_on_htmx() {
    let req = TestRequest::post()
      .insert_header(("HX-Request", "true"))
      .to_http_request();
    let resp = navigate(&req, Route::InvoicingList, None);
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    assert_eq!(resp.headers().get("HX-Redirect").unwrap(), "/invoicing");

    let req = TestRequest::post().to_http_request();
    let resp = navigate(&req, Route::InvoicingList, None);
    assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/invoicing");
  }
}
