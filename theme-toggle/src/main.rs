use theme_toggle::{init_logging, mount_theme, ThemeConfig};

fn main() {
    init_logging();

    match mount_theme(&ThemeConfig::default()) {
        Ok(mounted) => mounted.forget(),
        Err(e) => log::error!("Failed to mount theme toggle: {}", e),
    }
}
