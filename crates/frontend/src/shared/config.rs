//! Active page-helper configuration

use contracts::shared::ui_config::UiConfig;
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsValue;

thread_local! {
    static ACTIVE_CONFIG: RefCell<UiConfig> = RefCell::new(UiConfig::default());
    static FLASH_INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

pub fn active_config() -> UiConfig {
    ACTIVE_CONFIG.with(|config| config.borrow().clone())
}

pub fn set_active_config(config: UiConfig) {
    log::info!(
        "UI config: flash policy {}, max upload {} MB",
        config.flash_policy.code(),
        config.upload.max_size_mb
    );
    ACTIVE_CONFIG.with(|active| *active.borrow_mut() = config);
}

/// `true` only for the first call on this page; flash timers are started once.
pub fn claim_flash_init() -> bool {
    !FLASH_INITIALIZED.with(|done| done.replace(true))
}

/// Read config passed from a page script: a JSON string or a plain object.
/// `undefined`/`null` and anything invalid fall back to defaults.
pub fn config_from_js(value: &JsValue) -> UiConfig {
    if value.is_undefined() || value.is_null() {
        return UiConfig::default();
    }

    let parsed = match value.as_string() {
        Some(json) => UiConfig::from_json(&json).map_err(|e| e.to_string()),
        None => serde_wasm_bindgen::from_value::<UiConfig>(value.clone())
            .map_err(|e| e.to_string())
            .and_then(validate),
    };

    parsed.unwrap_or_else(|err| {
        log::warn!("Invalid UI config, using defaults: {}", err);
        UiConfig::default()
    })
}

fn validate(config: UiConfig) -> Result<UiConfig, String> {
    if config.upload.allowed_extensions.is_empty() {
        return Err("upload.allowed_extensions must not be empty".to_string());
    }
    Ok(config)
}
