//! Surfaces the theme controller reads from and writes to.
//!
//! The browser implementations live in `dom`; the in-memory doubles in
//! `memory` back the unit tests.

use crate::error::ThemeError;

/// Durable key-value storage scoped to the page origin.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The document root element carrying the theme attribute.
pub trait ThemeRoot {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// Element whose text shows the toggle glyph.
pub trait IconDisplay {
    fn set_icon(&self, glyph: &str);
}
