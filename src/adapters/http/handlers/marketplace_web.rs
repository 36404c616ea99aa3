use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::dtos::MarketplaceQuery;
use crate::adapters::http::errors::ApiError;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::marketplace::{BrowsePurchasersCommand, BrowsePurchasersUseCase};
use crate::domain::feedback::Route;

use super::is_htmx;

// GET /marketplace - Data purchaser directory
//
// Filter links target the grid with htmx; those requests get the grid only.
pub async fn marketplace_page(
  req: HttpRequest,
  query: web::Query<MarketplaceQuery>,
  templates: web::Data<TemplateEngine>,
  browse_purchasers_use_case: web::Data<Arc<BrowsePurchasersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let query = query.into_inner();
  let response = browse_purchasers_use_case
    .execute(BrowsePurchasersCommand {
      category: query.category,
      query: query.q,
    })
    .await?;

  let mut context = tera::Context::new();
  context.insert("purchasers", &response.purchasers);
  context.insert("categories", &response.categories);
  context.insert(
    "category_selected",
    &response.categories.iter().any(|category| category.active),
  );
  context.insert("query", &response.query);
  context.insert("total", &response.total);

  let html = if is_htmx(&req) {
    templates.render_fragment("partials/purchaser_grid.html.tera", &context)?
  } else {
    templates.render_page(
      "pages/marketplace.html.tera",
      Route::Marketplace,
      context,
      None,
    )?
  };

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
