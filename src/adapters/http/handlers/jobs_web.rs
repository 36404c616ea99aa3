use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::dtos::StatusQuery;
use crate::adapters::http::errors::ApiError;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::jobs::{ListJobsCommand, ListJobsUseCase};
use crate::domain::feedback::Route;
use crate::domain::job::JobStatus;
use crate::domain::skeleton::jobs_list;

use super::fragment_url;

// GET /jobs - Jobs page, rows load after the skeleton
pub async fn jobs_page(
  query: web::Query<StatusQuery>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, ApiError> {
  query.parse::<JobStatus>()?;

  let mut context = tera::Context::new();
  context.insert("skeleton", &jobs_list());
  context.insert("list_url", &fragment_url("/jobs/list", &*query)?);

  let html = templates.render_page("pages/jobs.html.tera", Route::JobsList, context, None)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// GET /jobs/list - Job rows fragment
pub async fn jobs_list_fragment(
  query: web::Query<StatusQuery>,
  templates: web::Data<TemplateEngine>,
  list_jobs_use_case: web::Data<Arc<ListJobsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let response = list_jobs_use_case
    .execute(ListJobsCommand {
      status_filter: query.into_inner().status,
    })
    .await?;

  tracing::debug!(jobs = response.jobs.len(), "Rendering job list");

  let mut context = tera::Context::new();
  context.insert("listing", &response);

  let html = templates.render_fragment("partials/job_list.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// GET /jobs/loading - Jobs placeholder on its own
pub async fn jobs_loading(templates: web::Data<TemplateEngine>) -> Result<HttpResponse, ApiError> {
  let mut context = tera::Context::new();
  context.insert("skeleton", &jobs_list());

  let html = templates.render_fragment("partials/skeleton.html.tera", &context)?;
  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
