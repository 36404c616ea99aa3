use actix_web::{HttpResponse, http::header};

use crate::domain::feedback::Route;

/// The dashboard opens on invoicing
pub async fn home() -> HttpResponse {
  HttpResponse::Found()
    .insert_header((header::LOCATION, Route::InvoicingList.path()))
    .finish()
}
