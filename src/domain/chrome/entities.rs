use serde::Serialize;

use super::errors::ChromeError;
use super::value_objects::{HEX_COLOR, ThemeAttribute, ThemeMode, Typeface, WidgetPosition};

/// Theme provider settings shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSettings {
  pub attribute: ThemeAttribute,
  pub default_mode: ThemeMode,
  pub enable_system: bool,
  pub disable_transition_on_change: bool,
}

impl ThemeSettings {
  pub fn new(
    attribute: ThemeAttribute,
    default_mode: ThemeMode,
    enable_system: bool,
    disable_transition_on_change: bool,
  ) -> Result<Self, ChromeError> {
    if default_mode == ThemeMode::System && !enable_system {
      return Err(ChromeError::SystemThemeDisabled);
    }
    Ok(Self {
      attribute,
      default_mode,
      enable_system,
      disable_transition_on_change,
    })
  }
}

impl Default for ThemeSettings {
  fn default() -> Self {
    Self {
      attribute: ThemeAttribute::Class,
      default_mode: ThemeMode::System,
      enable_system: true,
      disable_transition_on_change: true,
    }
  }
}

/// Support chatbot mounted after the content of every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatbotWidget {
  pub name: String,
  pub script_src: String,
  pub greeting: String,
  pub accent_color: String,
  pub position: WidgetPosition,
}

impl ChatbotWidget {
  pub fn new(
    name: impl Into<String>,
    script_src: impl Into<String>,
    greeting: impl Into<String>,
    accent_color: impl Into<String>,
    position: WidgetPosition,
  ) -> Result<Self, ChromeError> {
    let name = name.into().trim().to_string();
    let script_src = script_src.into().trim().to_string();
    let greeting = greeting.into().trim().to_string();
    let accent_color = accent_color.into().trim().to_string();

    if name.is_empty() {
      return Err(ChromeError::InvalidChatbot("name is required".to_string()));
    }
    if !(script_src.starts_with("https://") || script_src.starts_with('/')) {
      return Err(ChromeError::InvalidChatbot(format!(
        "script must be an https URL or a local path, got '{}'",
        script_src
      )));
    }
    if greeting.is_empty() {
      return Err(ChromeError::InvalidChatbot(
        "greeting is required".to_string(),
      ));
    }
    if !HEX_COLOR.is_match(&accent_color) {
      return Err(ChromeError::InvalidChatbot(format!(
        "accent colour must look like #1f6feb, got '{}'",
        accent_color
      )));
    }

    Ok(Self {
      name,
      script_src,
      greeting,
      accent_color,
      position,
    })
  }
}

/// Page-wide chrome: typography, theming and the support widget.
///
/// Built once at start-up and applied by the template engine to every full
/// page, so no page can render without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chrome {
  body_font: Typeface,
  heading_font: Typeface,
  theme: ThemeSettings,
  chatbot: ChatbotWidget,
  /// Value of the `style` attribute on the document root.
  root_style: String,
  font_stylesheets: Vec<String>,
}

impl Chrome {
  pub fn new(
    body_font: Typeface,
    heading_font: Typeface,
    theme: ThemeSettings,
    chatbot: ChatbotWidget,
  ) -> Result<Self, ChromeError> {
    if body_font.css_variable() == heading_font.css_variable() {
      return Err(ChromeError::DuplicateCssVariable(
        body_font.css_variable().to_string(),
      ));
    }

    let root_style = format!(
      "{}; {}",
      body_font.declaration(),
      heading_font.declaration()
    );

    let mut font_stylesheets = vec![body_font.stylesheet_href()];
    if heading_font.family() != body_font.family() {
      font_stylesheets.push(heading_font.stylesheet_href());
    }

    Ok(Self {
      body_font,
      heading_font,
      theme,
      chatbot,
      root_style,
      font_stylesheets,
    })
  }

  pub fn body_font(&self) -> &Typeface {
    &self.body_font
  }

  pub fn heading_font(&self) -> &Typeface {
    &self.heading_font
  }

  pub fn theme(&self) -> &ThemeSettings {
    &self.theme
  }

  pub fn chatbot(&self) -> &ChatbotWidget {
    &self.chatbot
  }

  pub fn root_style(&self) -> &str {
    &self.root_style
  }

  pub fn font_stylesheets(&self) -> &[String] {
    &self.font_stylesheets
  }
}
