use serde::{Deserialize, Serialize};

pub(crate) const SETTINGS_VERSION: u32 = 1;
pub(crate) const SETTINGS_KEY: &str = "kazudoru.settings.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SettingsBlob {
    pub(crate) version: u32,
    pub(crate) dark: bool,
}

impl Default for SettingsBlob {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            dark: false,
        }
    }
}

pub(crate) fn load_settings() -> SettingsBlob {
    let Some(window) = web_sys::window() else {
        return SettingsBlob::default();
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return SettingsBlob::default();
    };
    let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) else {
        return SettingsBlob::default();
    };
    let Ok(settings) = serde_json::from_str::<SettingsBlob>(&raw) else {
        return SettingsBlob::default();
    };
    if settings.version != SETTINGS_VERSION {
        return SettingsBlob::default();
    }
    settings
}

pub(crate) fn save_settings(settings: SettingsBlob) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };
    let Ok(raw) = serde_json::to_string(&settings) else {
        return;
    };
    let _ = storage.set_item(SETTINGS_KEY, &raw);
}

pub(crate) fn apply_theme(dark: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.set_attribute("data-theme", if dark { "dark" } else { "light" });
}
