pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod surface;
pub mod theme;

pub use config::*;
pub use controller::*;
pub use dom::*;
pub use error::*;
pub use surface::*;
pub use theme::*;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    // Mount made through the wasm exports. Replacing it detaches the old
    // click listener.
    static MOUNTED: RefCell<Option<MountedTheme>> = const { RefCell::new(None) };
}

/// Mount with the default element ids, storage key and attribute.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_exported(&ThemeConfig::default())
}

/// Mount with a JSON-encoded [`ThemeConfig`]; omitted fields keep defaults.
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(config: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(config)?;
    mount_exported(&config)
}

/// Theme of the page mounted through [`mount`] or [`mount_with_config`],
/// read from its configured root attribute. `None` before any mount.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    MOUNTED.with(|mounted| {
        mounted
            .borrow()
            .as_ref()
            .map(|mounted| mounted.current().as_str().to_string())
    })
}

fn mount_exported(config: &ThemeConfig) -> Result<(), JsValue> {
    init_logging();
    let mounted = mount_theme(config)?;
    let previous = MOUNTED.with(|slot| slot.borrow_mut().replace(mounted));
    drop(previous);
    Ok(())
}
