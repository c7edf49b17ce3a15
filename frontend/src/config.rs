use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;

/// Voice widget settings the edge server injects as `window.VAPI_CONFIG`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VapiConfig {
    pub assistant_id: String,
    pub public_key: String,
}

impl VapiConfig {
    pub fn is_complete(&self) -> bool {
        !self.assistant_id.is_empty() && !self.public_key.is_empty()
    }
}

/// Reads the injected config, or `None` when the page was served without it.
pub fn vapi_config() -> Option<VapiConfig> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("VAPI_CONFIG")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<VapiConfig>(value) {
        Ok(config) if config.is_complete() => Some(config),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Ignoring malformed VAPI_CONFIG: {}", e);
            None
        }
    }
}
