use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::{CreateInvoiceUseCase, ListInvoicesUseCase};
use crate::application::jobs::ListJobsUseCase;
use crate::application::marketplace::BrowsePurchasersUseCase;

use super::handlers::{invoices_web, jobs_web, marketplace_web, pages};
use super::templates::TemplateEngine;

/// Everything the web UI handlers pull from app data
#[derive(Clone)]
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub create_invoice_use_case: Arc<CreateInvoiceUseCase>,
  pub list_invoices_use_case: Arc<ListInvoicesUseCase>,
  pub list_jobs_use_case: Arc<ListJobsUseCase>,
  pub browse_purchasers_use_case: Arc<BrowsePurchasersUseCase>,
}

/// Configure web UI routes
///
/// # Routes
///
/// - GET / - Redirect to the invoicing page
/// - GET /invoicing - Invoicing page (skeleton, then list)
/// - GET /invoicing/list - Invoice table fragment
/// - GET /invoicing/loading - Invoicing skeleton fragment
/// - GET /invoicing/new - Invoice creation form
/// - POST /invoicing/new - Submit an invoice draft
/// - GET /jobs - Jobs page (skeleton, then rows)
/// - GET /jobs/list - Job rows fragment
/// - GET /jobs/loading - Jobs skeleton fragment
/// - GET /marketplace - Data purchaser directory
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .route("/", web::get().to(pages::home));

  cfg.service(
    web::scope("/invoicing")
      .app_data(web::Data::new(deps.create_invoice_use_case))
      .app_data(web::Data::new(deps.list_invoices_use_case))
      .route("", web::get().to(invoices_web::invoicing_page))
      .route("/list", web::get().to(invoices_web::invoice_list_fragment))
      .route("/loading", web::get().to(invoices_web::invoicing_loading))
      .route("/new", web::get().to(invoices_web::new_invoice_page))
      .route("/new", web::post().to(invoices_web::create_invoice_submit)),
  );

  cfg.service(
    web::scope("/jobs")
      .app_data(web::Data::new(deps.list_jobs_use_case))
      .route("", web::get().to(jobs_web::jobs_page))
      .route("/list", web::get().to(jobs_web::jobs_list_fragment))
      .route("/loading", web::get().to(jobs_web::jobs_loading)),
  );

  cfg.service(
    web::scope("/marketplace")
      .app_data(web::Data::new(deps.browse_purchasers_use_case))
      .route("", web::get().to(marketplace_web::marketplace_page)),
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adapters::http::flash::FLASH_COOKIE;
  use crate::adapters::http::middleware::RequestIdMiddleware;
  use crate::domain::feedback::Notification;
  use crate::domain::invoice::{
    InvoiceDraft, InvoiceError, InvoiceSubmissionService, InvoiceSubmitter, SubmissionOutcome,
  };
  use crate::infrastructure::config::Config;
  use crate::infrastructure::mock_data::{
    MockInvoiceListing, MockJobListing, MockPurchaserCatalog,
  };
  use crate::infrastructure::submission::SimulatedInvoiceSubmitter;
  use actix_web::{
    App,
    http::{StatusCode, header},
    test::{self, TestRequest},
  };
  use async_trait::async_trait;
  use std::time::Duration;

  const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

  struct UnavailableSubmitter;

  #[async_trait]
  impl InvoiceSubmitter for UnavailableSubmitter {
    async fn submit(&self, _draft: &InvoiceDraft) -> SubmissionOutcome {
      Err(InvoiceError::SubmissionFailed("billing offline".to_string()))
    }
  }

  fn dependencies(submitter: Arc<dyn InvoiceSubmitter>) -> WebRouteDependencies {
    let config: Config = toml::from_str(DEFAULT_CONFIG).expect("default config parses");
    let templates = TemplateEngine::new(&config.templates.glob, config.chrome().unwrap()).unwrap();
    let submission_service = Arc::new(InvoiceSubmissionService::new(submitter));

    WebRouteDependencies {
      templates,
      create_invoice_use_case: Arc::new(CreateInvoiceUseCase::new(
        submission_service,
        Duration::from_secs(5),
      )),
      list_invoices_use_case: Arc::new(ListInvoicesUseCase::new(Arc::new(
        MockInvoiceListing::seeded(),
      ))),
      list_jobs_use_case: Arc::new(ListJobsUseCase::new(Arc::new(MockJobListing::seeded()))),
      browse_purchasers_use_case: Arc::new(BrowsePurchasersUseCase::new(Arc::new(
        MockPurchaserCatalog::seeded(),
      ))),
    }
  }

  fn fast_submitter() -> Arc<dyn InvoiceSubmitter> {
    Arc::new(SimulatedInvoiceSubmitter::new(Duration::from_millis(10)))
  }

  macro_rules! app {
    ($submitter:expr) => {{
      let deps = dependencies($submitter);
      test::init_service(
        App::new()
          .wrap(RequestIdMiddleware::new())
          .configure(move |cfg| configure_web_routes(cfg, deps)),
      )
      .await
    }};
  }

  fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
  }

  fn decode_flash(value: &str) -> Notification {
    serde_json::from_slice(&hex::decode(value).unwrap()).unwrap()
  }

  #[actix_web::test]
  async fn test_acme_submission_notifies_and_navigates() {
    let app = app!(fast_submitter());

    let req = TestRequest::post()
      .uri("/invoicing/new")
      .insert_header(("HX-Request", "true"))
      .set_form([("client_name", "Acme Co"), ("amount", "500")])
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("HX-Redirect").unwrap(), "/invoicing");
    assert!(resp.headers().contains_key("x-request-id"));

    let flash = resp
      .response()
      .cookies()
      .find(|c| c.name() == FLASH_COOKIE)
      .expect("flash cookie set");
    let notification = decode_flash(flash.value());
    assert_eq!(notification.title, "Invoice created");
    assert_eq!(
      notification.description,
      "Invoice for Acme Co has been successfully created."
    );
  }

  #[actix_web::test]
  async fn test_plain_form_post_redirects_with_see_other() {
    let app = app!(fast_submitter());

    let req = TestRequest::post()
      .uri("/invoicing/new")
      .set_form([
        ("client_name", "Harbour Bank"),
        ("amount", "1250.50"),
        ("currency", "AUD"),
        ("client_email", ""),
      ])
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/invoicing");
    assert!(resp.headers().get("HX-Redirect").is_none());
  }

  #[actix_web::test]
  async fn test_two_quick_submissions_each_navigate() {
    let app = app!(fast_submitter());

    let mut descriptions = Vec::new();
    for client in ["First Client", "Second Client"] {
      let req = TestRequest::post()
        .uri("/invoicing/new")
        .insert_header(("HX-Request", "true"))
        .set_form([("client_name", client), ("amount", "100")])
        .to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.headers().get("HX-Redirect").unwrap(), "/invoicing");

      let flash = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .unwrap();
      descriptions.push(decode_flash(flash.value()).description);
    }

    assert_eq!(
      descriptions,
      [
        "Invoice for First Client has been successfully created.",
        "Invoice for Second Client has been successfully created.",
      ]
    );
  }

  #[actix_web::test]
  async fn test_invalid_draft_is_rejected_without_navigation() {
    let app = app!(fast_submitter());

    let req = TestRequest::post()
      .uri("/invoicing/new")
      .insert_header(("HX-Request", "true"))
      .set_form([("client_name", ""), ("amount", "-5")])
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.headers().get("HX-Redirect").is_none());
    assert!(resp.response().cookies().next().is_none());

    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("Invoice not created"));
    assert!(body.contains("Amount must be greater than zero"));
    assert!(!body.contains("data-chatbot-widget"));
  }

  #[actix_web::test]
  async fn test_due_date_before_issue_date_is_rejected() {
    let app = app!(fast_submitter());

    let req = TestRequest::post()
      .uri("/invoicing/new")
      .set_form([
        ("client_name", "Acme Co"),
        ("amount", "500"),
        ("issue_date", "2026-10-16"),
        ("due_date", "2026-10-01"),
      ])
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.headers().get(header::LOCATION).is_none());

    // Plain posts get the full page back
    let body = body_text(&test::read_body(resp).await);
    assert_eq!(body.matches("data-chatbot-widget").count(), 1);
    assert!(body.contains("Acme Co"));
  }

  #[actix_web::test]
  async fn test_failing_submitter_yields_bad_gateway() {
    let app = app!(Arc::new(UnavailableSubmitter));

    let req = TestRequest::post()
      .uri("/invoicing/new")
      .insert_header(("HX-Request", "true"))
      .set_form([("client_name", "Acme Co"), ("amount", "500")])
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(resp.headers().get("HX-Redirect").is_none());

    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("Invoice not created"));
  }

  #[actix_web::test]
  async fn test_invoicing_page_consumes_flash() {
    let app = app!(fast_submitter());
    let notification = Notification::success(
      "Invoice created",
      "Invoice for Acme Co has been successfully created.",
    );

    let req = TestRequest::get()
      .uri("/invoicing")
      .cookie(crate::adapters::http::flash::flash_cookie(&notification).unwrap())
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared = resp
      .response()
      .cookies()
      .find(|c| c.name() == FLASH_COOKIE)
      .expect("flash cookie cleared");
    assert_eq!(cleared.value(), "");

    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("Invoice for Acme Co has been successfully created."));
    assert!(body.contains("hx-get=\"/invoicing/list\""));
    assert!(body.contains("data-skeleton=\"invoicing-list\""));
  }

  #[actix_web::test]
  async fn test_malformed_flash_cookie_is_cleared() {
    let app = app!(fast_submitter());

    let req = TestRequest::get()
      .uri("/invoicing")
      .cookie(actix_web::cookie::Cookie::new(FLASH_COOKIE, "not-hex"))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared = resp
      .response()
      .cookies()
      .find(|c| c.name() == FLASH_COOKIE)
      .expect("malformed flash cookie cleared");
    assert_eq!(cleared.value(), "");

    let body = body_text(&test::read_body(resp).await);
    assert!(!body.contains("data-toast"));
  }

  #[actix_web::test]
  async fn test_list_pages_carry_known_filters_and_reject_unknown_ones() {
    let app = app!(fast_submitter());

    let req = TestRequest::get().uri("/jobs?status=in_progress").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("hx-get=\"/jobs/list?status=in_progress\""));

    let req = TestRequest::get().uri("/invoicing?status=paid").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("hx-get=\"/invoicing/list?status=paid\""));

    for uri in ["/invoicing?status=bogus", "/jobs?status=bogus"] {
      let req = TestRequest::get().uri(uri).to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
  }

  #[actix_web::test]
  async fn test_jobs_skeleton_has_six_rows() {
    let app = app!(fast_submitter());

    for uri in ["/jobs", "/jobs/loading"] {
      let req = TestRequest::get().uri(uri).to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::OK);

      let body = body_text(&test::read_body(resp).await);
      assert_eq!(body.matches("data-skeleton-row").count(), 6, "{}", uri);
    }
  }

  #[actix_web::test]
  async fn test_list_fragments_render_seed_data() {
    let app = app!(fast_submitter());

    let req = TestRequest::get().uri("/invoicing/list").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(&test::read_body(resp).await);
    assert!(body.contains("data-invoice-row"));
    assert!(!body.contains("data-chatbot-widget"));

    let req = TestRequest::get().uri("/jobs/list?status=archived").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn test_every_page_has_fonts_and_one_chatbot() {
    let app = app!(fast_submitter());

    for uri in ["/invoicing", "/invoicing/new", "/jobs", "/marketplace"] {
      let req = TestRequest::get().uri(uri).to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::OK, "{}", uri);

      let body = body_text(&test::read_body(resp).await);
      assert!(body.contains("--font-sans"), "{}", uri);
      assert!(body.contains("--font-heading"), "{}", uri);
      assert_eq!(body.matches("data-chatbot-widget").count(), 1, "{}", uri);
    }
  }

  #[actix_web::test]
  async fn test_marketplace_filters() {
    let app = app!(fast_submitter());

    let req = TestRequest::get()
      .uri("/marketplace?category=insurer")
      .insert_header(("HX-Request", "true"))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(&test::read_body(resp).await);
    assert_eq!(body.matches("data-purchaser-card").count(), 2);
    assert!(!body.contains("data-chatbot-widget"));
  }

  #[actix_web::test]
  async fn test_home_redirects_to_invoicing() {
    let app = app!(fast_submitter());

    let req = TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/invoicing");
  }
}
