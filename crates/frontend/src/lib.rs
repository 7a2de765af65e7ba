pub mod shared;

use contracts::shared::flash_policy::DISMISS_DELAY_MS;
use shared::config::{active_config, claim_flash_init, config_from_js, set_active_config};
use shared::flash::{dismiss_flashes, DocumentFinder};
use shared::prompt::BrowserPrompt;
use shared::upload::{check_selected_file, validate_file_input};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::HtmlInputElement;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Replace the active configuration. Accepts a JSON string or an object.
#[wasm_bindgen(js_name = configure)]
pub fn configure(config: JsValue) {
    set_active_config(config_from_js(&config));
}

/// "14 de marzo de 2024"
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: JsValue) -> String {
    shared::dates::format_js_date(&value)
}

#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str) -> bool {
    shared::prompt::confirm_action(&BrowserPrompt, message)
}

/// Validate the file chosen in `input`; alerts and clears it on rejection.
#[wasm_bindgen(js_name = validateFile)]
pub fn validate_file(input: &HtmlInputElement) -> bool {
    validate_file_input(input, &BrowserPrompt, &active_config().upload)
}

/// Rejection message for the chosen file, without alerting or clearing.
/// `undefined` when the file is acceptable or nothing is selected.
#[wasm_bindgen(js_name = uploadError)]
pub fn upload_error(input: &HtmlInputElement) -> Option<String> {
    match check_selected_file(input, &active_config().upload)? {
        Ok(_) => None,
        Err(rejection) => Some(rejection.message()),
    }
}

/// Schedule auto-dismiss of flash messages after the page content is ready.
/// Only the first call schedules anything; later calls return 0.
#[wasm_bindgen(js_name = initFlashMessages)]
pub fn init_flash_messages() -> u32 {
    let Some(finder) = DocumentFinder::current() else {
        log::error!("Flash messages: no document available");
        return 0;
    };
    if !claim_flash_init() {
        log::warn!("Flash messages already initialized, skipping");
        return 0;
    }
    dismiss_flashes(&finder, active_config().flash_policy, DISMISS_DELAY_MS) as u32
}

#[wasm_bindgen(js_name = initFlashMessagesWith)]
pub fn init_flash_messages_with(config: JsValue) -> u32 {
    configure(config);
    init_flash_messages()
}
