use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::surface::{IconDisplay, PreferenceStore, ThemeRoot};
use crate::theme::Theme;

/// Keeps the stored preference, the root attribute and the toggle glyph in
/// step.
///
/// All surfaces are injected. Every method takes `&self`: the surfaces are
/// single-threaded handles with interior mutability, the same way
/// `web_sys` elements are.
pub struct ThemeController<S, R, I> {
    store: S,
    root: R,
    icon: Option<I>,
    storage_key: String,
    attribute: String,
    default_theme: Theme,
}

impl<S, R, I> ThemeController<S, R, I>
where
    S: PreferenceStore,
    R: ThemeRoot,
    I: IconDisplay,
{
    pub fn new(store: S, root: R, icon: Option<I>, config: &ThemeConfig) -> Self {
        Self {
            store,
            root,
            icon,
            storage_key: config.storage_key.clone(),
            attribute: config.attribute.clone(),
            default_theme: config.default_theme,
        }
    }

    /// Apply the persisted preference (or the default) to the root and icon.
    /// Nothing is written to the store.
    pub fn initialize(&self) -> Result<Theme, ThemeError> {
        let theme = self.stored_theme();
        self.root.set_attribute(&self.attribute, theme.as_str())?;
        self.update_icon(theme);
        Ok(theme)
    }

    /// Flip the theme currently on the root and persist the result.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let next = self.current().toggled();
        self.set_theme(next)?;
        log::debug!("Theme toggled to {next}");
        Ok(next)
    }

    /// Write `theme` to the root, the store and the icon.
    ///
    /// A failed store write is logged and does not undo the visible change.
    pub fn set_theme(&self, theme: Theme) -> Result<(), ThemeError> {
        self.root.set_attribute(&self.attribute, theme.as_str())?;
        if let Err(e) = self.store.save(&self.storage_key, theme.as_str()) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
        self.update_icon(theme);
        Ok(())
    }

    /// Theme on the root attribute. Missing or unrecognized values read as
    /// the default.
    pub fn current(&self) -> Theme {
        match self.root.attribute(&self.attribute) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                log::warn!(
                    "Unrecognized {} value {:?}, using {}",
                    self.attribute,
                    value,
                    self.default_theme
                );
                self.default_theme
            }),
            None => self.default_theme,
        }
    }

    pub fn update_icon(&self, theme: Theme) {
        if let Some(icon) = &self.icon {
            icon.set_icon(theme.icon());
        }
    }

    fn stored_theme(&self) -> Theme {
        match self.store.load(&self.storage_key) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                log::warn!(
                    "Ignoring stored theme {:?}, using {}",
                    value,
                    self.default_theme
                );
                self.default_theme
            }),
            Ok(None) => {
                log::debug!("No stored theme, using {}", self.default_theme);
                self.default_theme
            }
            Err(e) => {
                log::warn!("Theme storage unavailable, using {}: {}", self.default_theme, e);
                self.default_theme
            }
        }
    }
}
