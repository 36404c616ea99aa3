pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{ChatbotWidget, Chrome, ThemeSettings};
pub use errors::ChromeError;
pub use value_objects::{ThemeAttribute, ThemeMode, Typeface, WidgetPosition};
