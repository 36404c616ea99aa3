use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use validator::{Validate, ValidationError};

use crate::domain::chrome::value_objects::{CSS_VARIABLE, HEX_COLOR};
use crate::domain::chrome::{
  ChatbotWidget, Chrome, ChromeError, ThemeAttribute, ThemeMode, ThemeSettings, Typeface,
  WidgetPosition,
};

fn default_submission_delay_ms() -> u64 {
  1000
}

fn default_submission_timeout() -> u64 {
  10
}

fn default_templates_glob() -> String {
  "templates/**/*.html.tera".to_string()
}

fn default_static_dir() -> String {
  "./static".to_string()
}

fn default_font_fallback() -> String {
  "ui-sans-serif, system-ui, sans-serif".to_string()
}

fn default_true() -> bool {
  true
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
  #[validate(nested)]
  pub server: ServerConfig,
  #[serde(default)]
  #[validate(nested)]
  pub submission: SubmissionConfig,
  #[serde(default)]
  pub templates: TemplatesConfig,
  #[serde(default)]
  pub assets: AssetsConfig,
  #[validate(nested)]
  pub chrome: ChromeConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerConfig {
  #[validate(length(min = 1))]
  pub host: String,
  pub port: u16,
}

/// Simulated invoice submission
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_submission_window"))]
pub struct SubmissionConfig {
  #[serde(default = "default_submission_delay_ms")]
  #[validate(range(max = 60000, message = "Submission delay cannot exceed one minute"))]
  pub delay_ms: u64,
  /// How long a request waits for a submission before reporting failure
  #[serde(default = "default_submission_timeout")]
  #[validate(range(min = 1, max = 300))]
  pub timeout_seconds: u64,
}

impl Default for SubmissionConfig {
  fn default() -> Self {
    Self {
      delay_ms: default_submission_delay_ms(),
      timeout_seconds: default_submission_timeout(),
    }
  }
}

/// The simulated backend must answer before requests give up on it.
fn validate_submission_window(config: &SubmissionConfig) -> Result<(), ValidationError> {
  if config.delay_ms >= config.timeout_seconds.saturating_mul(1000) {
    let mut error = ValidationError::new("submission_window");
    error.message = Some("Submission delay must be shorter than the submission timeout".into());
    return Err(error);
  }
  Ok(())
}

impl SubmissionConfig {
  pub fn delay(&self) -> Duration {
    Duration::from_millis(self.delay_ms)
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_seconds)
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
  #[serde(default = "default_templates_glob")]
  pub glob: String,
}

impl Default for TemplatesConfig {
  fn default() -> Self {
    Self {
      glob: default_templates_glob(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
  #[serde(default = "default_static_dir")]
  pub static_dir: String,
}

impl Default for AssetsConfig {
  fn default() -> Self {
    Self {
      static_dir: default_static_dir(),
    }
  }
}

/// Page chrome: fonts, theme and support widget
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChromeConfig {
  #[validate(nested)]
  pub body_font: TypefaceConfig,
  #[validate(nested)]
  pub heading_font: TypefaceConfig,
  #[serde(default)]
  pub theme: ThemeConfig,
  #[validate(nested)]
  pub chatbot: ChatbotConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TypefaceConfig {
  #[validate(length(min = 1, max = 64, message = "Font family must be 1-64 characters"))]
  pub family: String,
  #[validate(regex(path = *CSS_VARIABLE, message = "CSS variable must look like --font-sans"))]
  pub css_variable: String,
  #[validate(length(min = 1, message = "At least one font weight is required"))]
  pub weights: Vec<u16>,
  #[serde(default = "default_font_fallback")]
  pub fallback: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
  #[serde(default)]
  pub attribute: ThemeAttribute,
  #[serde(default)]
  pub default_mode: ThemeMode,
  #[serde(default = "default_true")]
  pub enable_system: bool,
  #[serde(default = "default_true")]
  pub disable_transition_on_change: bool,
}

impl Default for ThemeConfig {
  fn default() -> Self {
    Self {
      attribute: ThemeAttribute::default(),
      default_mode: ThemeMode::default(),
      enable_system: true,
      disable_transition_on_change: true,
    }
  }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatbotConfig {
  #[validate(length(min = 1, max = 80))]
  pub name: String,
  #[validate(length(min = 1))]
  pub script_src: String,
  #[validate(length(min = 1, max = 200))]
  pub greeting: String,
  #[validate(regex(path = *HEX_COLOR, message = "Accent colour must be a #rrggbb hex value"))]
  pub accent_color: String,
  #[serde(default)]
  pub position: WidgetPosition,
}

impl TryFrom<&TypefaceConfig> for Typeface {
  type Error = ChromeError;

  fn try_from(config: &TypefaceConfig) -> Result<Self, Self::Error> {
    Typeface::new(
      config.family.clone(),
      config.css_variable.clone(),
      config.weights.clone(),
      config.fallback.clone(),
    )
  }
}

impl TryFrom<&ChromeConfig> for Chrome {
  type Error = ChromeError;

  fn try_from(config: &ChromeConfig) -> Result<Self, Self::Error> {
    let theme = ThemeSettings::new(
      config.theme.attribute,
      config.theme.default_mode,
      config.theme.enable_system,
      config.theme.disable_transition_on_change,
    )?;
    let chatbot = ChatbotWidget::new(
      config.chatbot.name.clone(),
      config.chatbot.script_src.clone(),
      config.chatbot.greeting.clone(),
      config.chatbot.accent_color.clone(),
      config.chatbot.position,
    )?;

    Chrome::new(
      Typeface::try_from(&config.body_font)?,
      Typeface::try_from(&config.heading_font)?,
      theme,
      chatbot,
    )
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with VALUEDESK_ prefix
  ///
  /// # Environment Variables
  ///
  /// Environment variables use the VALUEDESK_ prefix and are separated by double underscores:
  /// - `VALUEDESK_SERVER__HOST=0.0.0.0`
  /// - `VALUEDESK_SERVER__PORT=8080`
  /// - `VALUEDESK_SUBMISSION__DELAY_MS=1000`
  /// - `VALUEDESK_SUBMISSION__TIMEOUT_SECONDS=10`
  /// - `VALUEDESK_CHROME__THEME__DEFAULT_MODE=dark`
  /// - `VALUEDESK_CHROME__CHATBOT__SCRIPT_SRC=https://widget.example.com/chat.js`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if a required file or value is missing, a value
  /// has the wrong type, or a value fails validation.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("VALUEDESK")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    let config: Config = config.try_deserialize()?;
    config
      .validate()
      .map_err(|e| ConfigError::Message(format!("Invalid configuration: {}", e)))?;

    Ok(config)
  }

  /// Build the page chrome described by the `chrome` section.
  pub fn chrome(&self) -> Result<Chrome, ChromeError> {
    Chrome::try_from(&self.chrome)
  }
}
