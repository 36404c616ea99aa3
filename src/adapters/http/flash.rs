//! One-shot toast carried across a redirect in a cookie.

use actix_web::{
  HttpRequest,
  cookie::{Cookie, SameSite, time::Duration},
};

use crate::domain::feedback::Notification;

pub const FLASH_COOKIE: &str = "flash_toast";

/// Cookie holding `notification` until the next page render.
pub fn flash_cookie(notification: &Notification) -> Result<Cookie<'static>, serde_json::Error> {
  let payload = hex::encode(serde_json::to_vec(notification)?);

  Ok(
    Cookie::build(FLASH_COOKIE, payload)
      .path("/")
      .http_only(true)
      .same_site(SameSite::Lax)
      .max_age(Duration::minutes(1))
      .finish(),
  )
}

/// Expired cookie that removes the flash from the browser.
pub fn clear_flash_cookie() -> Cookie<'static> {
  Cookie::build(FLASH_COOKIE, "")
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .max_age(Duration::seconds(0))
    .finish()
}

/// Pending notification on the request, if any.
///
/// A cookie that cannot be decoded is treated as absent.
pub fn read_flash(req: &HttpRequest) -> Option<Notification> {
  let cookie = req.cookie(FLASH_COOKIE)?;
  if cookie.value().is_empty() {
    return None;
  }

  let decoded = hex::decode(cookie.value())
    .map_err(|e| e.to_string())
    .and_then(|bytes| serde_json::from_slice(&bytes).map_err(|e| e.to_string()));

  match decoded {
    Ok(notification) => Some(notification),
    Err(e) => {
      tracing::debug!("Ignoring malformed flash cookie: {}", e);
      None
    }
  }
}
