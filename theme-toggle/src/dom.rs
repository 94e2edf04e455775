//! Browser bindings: `localStorage`, the `<html>` element and the toggle
//! markup served by the host page.

use std::rc::Rc;
use std::sync::Once;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Storage};

use crate::config::{MissingElementPolicy, ThemeConfig};
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::surface::{IconDisplay, PreferenceStore, ThemeRoot};
use crate::theme::Theme;

static LOGGER: Once = Once::new();

/// Route `log` records to the browser console. Safe to call more than once.
pub fn init_logging() {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::default()));
}

pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn new(storage: Option<Storage>) -> Self {
        Self { storage }
    }

    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", ThemeError::storage(e));
                None
            }
        });
        Self::new(storage)
    }

    fn storage(&self) -> Result<&Storage, ThemeError> {
        self.storage
            .as_ref()
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?.get_item(key).map_err(ThemeError::storage)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(ThemeError::storage)
    }
}

impl ThemeRoot for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        Element::set_attribute(self, name, value).map_err(ThemeError::dom)
    }
}

impl IconDisplay for Element {
    fn set_icon(&self, glyph: &str) {
        self.set_text_content(Some(glyph));
    }
}

pub type BrowserThemeController = ThemeController<BrowserStorage, Element, Element>;

type ClickHandler = Closure<dyn FnMut(MouseEvent)>;

/// A controller wired to the page. Dropping it detaches the click listener;
/// call [`MountedTheme::forget`] to keep it for the page lifetime.
pub struct MountedTheme {
    controller: Rc<BrowserThemeController>,
    listener: Option<(Element, ClickHandler)>,
}

impl MountedTheme {
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        self.controller.toggle()
    }

    pub fn current(&self) -> Theme {
        self.controller.current()
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn forget(mut self) {
        if let Some((_, handler)) = self.listener.take() {
            handler.forget();
        }
    }
}

impl Drop for MountedTheme {
    fn drop(&mut self) {
        if let Some((toggle, handler)) = self.listener.take() {
            let _ = toggle
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
    }
}

/// Look up the page elements, apply the initial theme and wire the toggle.
///
/// Elements are resolved before anything on the page is touched, so a
/// `FailFast` mount leaves the document unchanged.
pub fn mount_theme(config: &ThemeConfig) -> Result<MountedTheme, ThemeError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ThemeError::NoDocument)?;
    let root = document.document_element().ok_or(ThemeError::NoDocument)?;

    let toggle = find_element(&document, &config.toggle_id, config.missing_elements)?;
    let icon = find_element(&document, &config.icon_id, config.missing_elements)?;

    let controller = Rc::new(ThemeController::new(
        BrowserStorage::local(),
        root,
        icon,
        config,
    ));
    let theme = controller.initialize()?;
    log::info!("Theme initialized: {}", theme);

    let listener = match toggle {
        Some(toggle) => {
            let handler = click_handler(Rc::clone(&controller));
            toggle
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
                .map_err(ThemeError::dom)?;
            Some((toggle, handler))
        }
        None => None,
    };

    Ok(MountedTheme {
        controller,
        listener,
    })
}

fn click_handler(controller: Rc<BrowserThemeController>) -> ClickHandler {
    Closure::wrap(Box::new(move |_e: MouseEvent| {
        if let Err(e) = controller.toggle() {
            log::warn!("Theme toggle failed: {}", e);
        }
    }) as Box<dyn FnMut(MouseEvent)>)
}

fn find_element(
    document: &Document,
    id: &str,
    policy: MissingElementPolicy,
) -> Result<Option<Element>, ThemeError> {
    match document.get_element_by_id(id) {
        Some(element) => Ok(Some(element)),
        None => match policy {
            MissingElementPolicy::FailFast => Err(ThemeError::MissingElement {
                id: id.to_string(),
            }),
            MissingElementPolicy::Degrade => {
                log::warn!("Element #{} not found, theme toggle degraded", id);
                Ok(None)
            }
        },
    }
}
