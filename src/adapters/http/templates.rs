use std::sync::Arc;
use tera::Tera;

use crate::domain::chrome::Chrome;
use crate::domain::feedback::{Notification, Route, navigation};

/// Template engine wrapper for rendering HTML templates
///
/// Full pages always go through [`TemplateEngine::render_page`], which adds
/// the page chrome and navigation to the context. Fragments rendered with
/// [`TemplateEngine::render_fragment`] never receive chrome.
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
  chrome: Arc<Chrome>,
}

impl TemplateEngine {
  /// Create a new template engine from every template matching `glob`
  pub fn new(glob: &str, chrome: Chrome) -> Result<Self, tera::Error> {
    let mut tera = Tera::new(glob)?;
    tera.autoescape_on(vec!["html.tera", ".html"]);

    Ok(Self {
      tera: Arc::new(tera),
      chrome: Arc::new(chrome),
    })
  }

  pub fn chrome(&self) -> &Chrome {
    &self.chrome
  }

  /// Render a full page for `route`, optionally showing a toast
  pub fn render_page(
    &self,
    template: &str,
    route: Route,
    context: tera::Context,
    notification: Option<&Notification>,
  ) -> Result<String, tera::Error> {
    let mut context = context;
    context.insert("chrome", self.chrome.as_ref());
    context.insert("nav", &navigation(route));
    context.insert("current_path", route.path());
    context.insert("page_title", route.label());
    context.insert("notification", &notification);

    self.tera.render(template, &context)
  }

  /// Render a partial with the given context
  pub fn render_fragment(
    &self,
    template: &str,
    context: &tera::Context,
  ) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }
}
