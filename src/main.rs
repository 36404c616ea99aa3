use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valuedesk::{
  adapters::http::{RequestIdMiddleware, TemplateEngine, WebRouteDependencies, configure_web_routes},
  application::invoice::{CreateInvoiceUseCase, ListInvoicesUseCase},
  application::jobs::ListJobsUseCase,
  application::marketplace::BrowsePurchasersUseCase,
  domain::invoice::InvoiceSubmissionService,
  infrastructure::{
    config::Config,
    mock_data::{MockInvoiceListing, MockJobListing, MockPurchaserCatalog},
    submission::SimulatedInvoiceSubmitter,
  },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "valuedesk=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting valuedesk");

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  let chrome = config.chrome().context("Invalid page chrome configuration")?;
  tracing::info!(
    body_font = chrome.body_font().family(),
    heading_font = chrome.heading_font().family(),
    chatbot = %chrome.chatbot().name,
    "Page chrome ready"
  );

  let templates = TemplateEngine::new(&config.templates.glob, chrome)
    .with_context(|| format!("Failed to load templates from {}", config.templates.glob))?;

  // Simulated billing backend
  let submitter = Arc::new(SimulatedInvoiceSubmitter::new(config.submission.delay()));
  tracing::info!(
    "Invoice submissions complete after {:?}, timeout {:?}",
    config.submission.delay(),
    config.submission.timeout()
  );
  let submission_service = Arc::new(InvoiceSubmissionService::new(submitter));

  // Use cases
  let create_invoice_use_case = Arc::new(CreateInvoiceUseCase::new(
    submission_service,
    config.submission.timeout(),
  ));
  let list_invoices_use_case = Arc::new(ListInvoicesUseCase::new(Arc::new(
    MockInvoiceListing::seeded(),
  )));
  let list_jobs_use_case = Arc::new(ListJobsUseCase::new(Arc::new(MockJobListing::seeded())));
  let browse_purchasers_use_case = Arc::new(BrowsePurchasersUseCase::new(Arc::new(
    MockPurchaserCatalog::seeded(),
  )));

  let dependencies = WebRouteDependencies {
    templates,
    create_invoice_use_case,
    list_invoices_use_case,
    list_jobs_use_case,
    browse_purchasers_use_case,
  };

  let server_host = config.server.host.clone();
  let server_port = config.server.port;
  let static_dir = config.assets.static_dir.clone();

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    let dependencies = dependencies.clone();

    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      .configure(move |cfg| configure_web_routes(cfg, dependencies))
      // Static files
      .service(fs::Files::new("/static", &static_dir))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))
  .with_context(|| format!("Failed to bind {}:{}", server_host, server_port))?
  .run()
  .await?;

  Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
