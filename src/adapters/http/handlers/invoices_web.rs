use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::dtos::{
  CreateInvoiceForm, InvoiceFormOptions, StatusQuery, field_errors, field_for_error,
};
use crate::adapters::http::errors::ApiError;
use crate::adapters::http::flash::{FLASH_COOKIE, clear_flash_cookie, flash_cookie, read_flash};
use crate::adapters::http::templates::TemplateEngine;
use crate::application::invoice::{CreateInvoiceUseCase, ListInvoicesCommand, ListInvoicesUseCase};
use crate::domain::feedback::{Notification, Route};
use crate::domain::invoice::{InvoiceError, InvoiceStatus};
use crate::domain::skeleton::invoicing_list;

use super::{fragment_url, is_htmx, navigate};

// GET /invoicing - Invoicing page, list loads after the skeleton
pub async fn invoicing_page(
  req: HttpRequest,
  query: web::Query<StatusQuery>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, ApiError> {
  // The deferred list cannot swap a 400 in, so reject the filter up front.
  query.parse::<InvoiceStatus>().map_err(InvoiceError::from)?;

  let flash = read_flash(&req);

  let mut context = tera::Context::new();
  context.insert("skeleton", &invoicing_list());
  context.insert("list_url", &fragment_url("/invoicing/list", &*query)?);

  let html = templates.render_page(
    "pages/invoicing.html.tera",
    Route::InvoicingList,
    context,
    flash.as_ref(),
  )?;

  let mut response = HttpResponse::Ok();
  if req.cookie(FLASH_COOKIE).is_some() {
    response.cookie(clear_flash_cookie());
  }
  Ok(response.content_type("text/html").body(html))
}

// GET /invoicing/list - Invoice table fragment
pub async fn invoice_list_fragment(
  query: web::Query<StatusQuery>,
  templates: web::Data<TemplateEngine>,
  list_invoices_use_case: web::Data<Arc<ListInvoicesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = list_invoices_use_case
    .execute(ListInvoicesCommand {
      status_filter: query.into_inner().status,
    })
    .await?;

  let statuses: Vec<&str> = InvoiceStatus::ALL.iter().map(InvoiceStatus::as_str).collect();

  let mut context = tera::Context::new();
  context.insert("listing", &response);
  context.insert("statuses", &statuses);

  let html = templates.render_fragment("partials/invoice_list.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// GET /invoicing/loading - Invoicing placeholder on its own
pub async fn invoicing_loading(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, ApiError> {
  let mut context = tera::Context::new();
  context.insert("skeleton", &invoicing_list());

  let html = templates.render_fragment("partials/skeleton.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// GET /invoicing/new - Show invoice creation form
pub async fn new_invoice_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, ApiError> {
  let form = CreateInvoiceForm::blank(Utc::now().date_naive());
  let context = form_context(&form, &BTreeMap::new(), None);

  let html = templates.render_page(
    "pages/invoice_create.html.tera",
    Route::NewInvoice,
    context,
    None,
  )?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// POST /invoicing/new - Submit a draft, then navigate to the invoicing list
pub async fn create_invoice_submit(
  req: HttpRequest,
  form: web::Form<CreateInvoiceForm>,
  templates: web::Data<TemplateEngine>,
  create_invoice_use_case: web::Data<Arc<CreateInvoiceUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let form = form.into_inner();

  let command = match form.validate().and_then(|_| form.to_command()) {
    Ok(command) => command,
    Err(errors) => {
      let errors = field_errors(&errors);
      tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "Invoice form rejected");
      return render_form(
        &req,
        &templates,
        &form,
        &errors,
        &Notification::form_invalid(),
        StatusCode::UNPROCESSABLE_ENTITY,
      );
    }
  };

  match create_invoice_use_case.execute(command).await {
    Ok(response) => {
      tracing::info!(
        submission_id = %response.submission_id,
        "Invoice created, navigating to {}",
        response.redirect_to
      );

      let cookie = flash_cookie(&response.notification)
        .map_err(|e| ApiError::Internal(format!("Failed to encode notification: {}", e)))?;

      Ok(navigate(&req, response.redirect_to, Some(cookie)))
    }
    Err(InvoiceError::Validation(error)) => {
      let mut errors = BTreeMap::new();
      errors.insert(field_for_error(&error).to_string(), error.to_string());

      render_form(
        &req,
        &templates,
        &form,
        &errors,
        &Notification::form_invalid(),
        StatusCode::UNPROCESSABLE_ENTITY,
      )
    }
    Err(error) => {
      tracing::warn!("Invoice submission failed: {}", error);

      render_form(
        &req,
        &templates,
        &form,
        &BTreeMap::new(),
        &Notification::invoice_not_created(&error),
        StatusCode::BAD_GATEWAY,
      )
    }
  }
}

fn form_context(
  form: &CreateInvoiceForm,
  errors: &BTreeMap<String, String>,
  form_notification: Option<&Notification>,
) -> tera::Context {
  let mut context = tera::Context::new();
  context.insert("form", form);
  context.insert("errors", errors);
  context.insert("options", &InvoiceFormOptions::default());
  context.insert("form_notification", &form_notification);
  context
}

/// Re-render the form after a failed attempt, without navigating.
///
/// htmx swaps only the form; a plain post gets the whole page back.
fn render_form(
  req: &HttpRequest,
  templates: &TemplateEngine,
  form: &CreateInvoiceForm,
  errors: &BTreeMap<String, String>,
  notification: &Notification,
  status: StatusCode,
) -> Result<HttpResponse, ApiError> {
  let context = form_context(form, errors, Some(notification));

  let html = if is_htmx(req) {
    templates.render_fragment("partials/invoice_form.html.tera", &context)?
  } else {
    templates.render_page(
      "pages/invoice_create.html.tera",
      Route::NewInvoice,
      context,
      None,
    )?
  };

  Ok(
    HttpResponse::build(status)
      .content_type("text/html")
      .body(html),
  )
}
