use web_sys::Storage;

use crate::core::theme::ColorMode;

const COLOR_MODE_KEY: &str = "agent-monitor.color-mode";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_color_mode() -> Option<ColorMode> {
    let stored = local_storage()?.get_item(COLOR_MODE_KEY).ok().flatten()?;
    let mode = ColorMode::parse(&stored);
    if mode.is_none() {
        tracing::warn!("ignoring stored colour mode {:?}", stored);
    }
    mode
}

pub fn save_color_mode(mode: ColorMode) {
    let Some(storage) = local_storage() else {
        tracing::warn!("localStorage unavailable, colour mode not saved");
        return;
    };
    if let Err(err) = storage.set_item(COLOR_MODE_KEY, mode.as_str()) {
        tracing::error!("failed to save colour mode: {:?}", err);
    }
}
