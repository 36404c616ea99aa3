use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChromeError {
  #[error("Invalid CSS variable name '{0}': expected something like --font-sans")]
  InvalidCssVariable(String),

  #[error("Both typefaces use the CSS variable '{0}'")]
  DuplicateCssVariable(String),

  #[error("Invalid font family '{0}'")]
  InvalidFontFamily(String),

  #[error("Invalid font fallback '{0}'")]
  InvalidFontFallback(String),

  #[error("Typeface '{0}' needs at least one weight between 100 and 900")]
  InvalidFontWeights(String),

  #[error("Unknown theme mode '{0}'")]
  InvalidThemeMode(String),

  #[error("A system default theme requires following the system preference")]
  SystemThemeDisabled,

  #[error("Invalid chatbot widget: {0}")]
  InvalidChatbot(String),
}
