use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ChromeError;

lazy_static! {
  pub static ref CSS_VARIABLE: Regex = Regex::new(r"^--[a-z][a-z0-9-]*$").unwrap();
  static ref FONT_FAMILY: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").unwrap();
  static ref FONT_FALLBACK: Regex = Regex::new(r"^[a-z-]+(, ?[a-z-]+)*$").unwrap();
  pub static ref HEX_COLOR: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

const FONT_STYLESHEET_BASE: &str = "https://fonts.googleapis.com/css2";

/// A web font exposed to stylesheets through a CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typeface {
  family: String,
  css_variable: String,
  weights: Vec<u16>,
  fallback: String,
}

impl Typeface {
  pub fn new(
    family: impl Into<String>,
    css_variable: impl Into<String>,
    mut weights: Vec<u16>,
    fallback: impl Into<String>,
  ) -> Result<Self, ChromeError> {
    let family = family.into().trim().to_string();
    let css_variable = css_variable.into().trim().to_string();
    let fallback = fallback.into().trim().to_string();

    if !FONT_FAMILY.is_match(&family) {
      return Err(ChromeError::InvalidFontFamily(family));
    }
    if !CSS_VARIABLE.is_match(&css_variable) {
      return Err(ChromeError::InvalidCssVariable(css_variable));
    }
    if !FONT_FALLBACK.is_match(&fallback) {
      return Err(ChromeError::InvalidFontFallback(fallback));
    }

    weights.sort_unstable();
    weights.dedup();
    if weights.is_empty() || weights.iter().any(|w| !(100..=900).contains(w) || w % 100 != 0) {
      return Err(ChromeError::InvalidFontWeights(family));
    }

    Ok(Self {
      family,
      css_variable,
      weights,
      fallback,
    })
  }

  pub fn family(&self) -> &str {
    &self.family
  }

  pub fn css_variable(&self) -> &str {
    &self.css_variable
  }

  pub fn weights(&self) -> &[u16] {
    &self.weights
  }

  /// `--font-sans: 'Inter', sans-serif`
  pub fn declaration(&self) -> String {
    format!("{}: '{}', {}", self.css_variable, self.family, self.fallback)
  }

  pub fn stylesheet_href(&self) -> String {
    let weights = self
      .weights
      .iter()
      .map(u16::to_string)
      .collect::<Vec<_>>()
      .join(";");
    format!(
      "{}?family={}:wght@{}&display=swap",
      FONT_STYLESHEET_BASE,
      self.family.replace(' ', "+"),
      weights
    )
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
  Light,
  Dark,
  #[default]
  System,
}

impl ThemeMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      ThemeMode::Light => "light",
      ThemeMode::Dark => "dark",
      ThemeMode::System => "system",
    }
  }
}

impl FromStr for ThemeMode {
  type Err = ChromeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "light" => Ok(ThemeMode::Light),
      "dark" => Ok(ThemeMode::Dark),
      "system" => Ok(ThemeMode::System),
      _ => Err(ChromeError::InvalidThemeMode(s.to_string())),
    }
  }
}

impl fmt::Display for ThemeMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// HTML attribute the theme script toggles on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeAttribute {
  #[default]
  Class,
  DataTheme,
}

impl ThemeAttribute {
  pub fn as_str(&self) -> &'static str {
    match self {
      ThemeAttribute::Class => "class",
      ThemeAttribute::DataTheme => "data-theme",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
  #[default]
  BottomRight,
  BottomLeft,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_typeface_validation() {
    assert!(Typeface::new("Inter", "--font-sans", vec![400], "sans-serif").is_ok());
    assert!(Typeface::new("Inter", "font-sans", vec![400], "sans-serif").is_err());
    assert!(Typeface::new("Inter", "--Font", vec![400], "sans-serif").is_err());
    assert!(Typeface::new("Inter;", "--font-sans", vec![400], "sans-serif").is_err());
    assert!(Typeface::new("Inter", "--font-sans", vec![], "sans-serif").is_err());
    assert!(Typeface::new("Inter", "--font-sans", vec![450], "sans-serif").is_err());
    assert!(Typeface::new("Inter", "--font-sans", vec![400], "serif; color: red").is_err());
  }

  #[test]
  fn test_typeface_rendering() {
    let font = Typeface::new(
      "Plus Jakarta Sans",
      "--font-heading",
      vec![700, 500, 700],
      "ui-sans-serif, sans-serif",
    )
    .unwrap();

    assert_eq!(font.weights(), &[500, 700]);
    assert_eq!(
      font.declaration(),
      "--font-heading: 'Plus Jakarta Sans', ui-sans-serif, sans-serif"
    );
    assert_eq!(
      font.stylesheet_href(),
      "https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@500;700&display=swap"
    );
  }

  #[test]
  fn test_theme_mode_parsing() {
    assert_eq!(ThemeMode::from_str("System").unwrap(), ThemeMode::System);
    assert_eq!(ThemeMode::default(), ThemeMode::System);
    assert!(ThemeMode::from_str("sepia").is_err());
  }
}
