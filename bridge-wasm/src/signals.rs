//! Browser-side capture of the environment signals.
//!
//! Everything the dispatcher needs from the page is read here, once:
//! `navigator.userAgent`, the native shell's bridge global and the host's
//! global configuration object. Global names are configurable through
//! [`WasmBridgeConfig`].

use core_runtime::config::DEFAULT_HOST_FLAG_KEY;
use js_sys::{Reflect, JSON};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wasm_bindgen::JsValue;

use crate::error::{WasmError, WasmResult};
use crate::host::JsNativeBridge;

/// Names of the browser globals the bridge reads.
///
/// Deserializes from a JavaScript options object with camelCase keys; missing
/// keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasmBridgeConfig {
    /// Global injected by the native shell
    pub native_bridge_global: String,
    /// Global holding the host configuration object
    pub config_global: String,
    /// Key (or JSON pointer) of the hosting-app flag inside that object
    pub host_flag_key: String,
    /// WeChat / WeCom JS-SDK global
    pub enterprise_chat_global: String,
    /// DingTalk JS-API global
    pub corporate_im_global: String,
    /// Hosting app SDK global
    pub host_app_global: String,
}

impl Default for WasmBridgeConfig {
    fn default() -> Self {
        Self {
            native_bridge_global: "NativeBridge".to_string(),
            config_global: "config".to_string(),
            host_flag_key: DEFAULT_HOST_FLAG_KEY.to_string(),
            enterprise_chat_global: "wx".to_string(),
            corporate_im_global: "dd".to_string(),
            host_app_global: "HostApp".to_string(),
        }
    }
}

impl WasmBridgeConfig {
    /// Read a config from a JavaScript options object. `undefined` and `null`
    /// yield the defaults.
    pub fn from_js(options: JsValue) -> WasmResult<Self> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(options)?)
    }
}

/// Raw signals read from the page.
#[derive(Debug, Clone)]
pub struct BrowserSignals {
    /// `navigator.userAgent`
    pub user_agent: String,
    /// Native shell bridge, if injected
    pub native_bridge: Option<JsNativeBridge>,
    /// Host configuration object serialized as JSON text
    pub host_config_json: Option<String>,
}

/// Snapshot the browser globals named in `config`.
///
/// # Errors
///
/// Fails only when `window` or `navigator` is unavailable (e.g. in a worker).
pub fn capture_signals(config: &WasmBridgeConfig) -> WasmResult<BrowserSignals> {
    let window = web_sys::window().ok_or_else(|| WasmError::MissingGlobal("window".into()))?;
    let user_agent = window.navigator().user_agent()?;

    let native_bridge = JsNativeBridge::from_global(&config.native_bridge_global);
    let host_config_json = read_config_object(&window, &config.config_global);

    debug!(
        has_native_bridge = native_bridge.is_some(),
        has_host_config = host_config_json.is_some(),
        "Captured browser signals"
    );

    Ok(BrowserSignals {
        user_agent,
        native_bridge,
        host_config_json,
    })
}

/// Serialize `window[global]` to JSON. Non-objects and objects that cannot be
/// stringified (cycles, BigInt) count as absent.
fn read_config_object(window: &web_sys::Window, global: &str) -> Option<String> {
    let object = Reflect::get(window, &JsValue::from_str(global)).ok()?;
    if !object.is_object() {
        return None;
    }

    match JSON::stringify(&object) {
        Ok(text) => text.as_string(),
        Err(err) => {
            warn!(
                global,
                error = %WasmError::from(err),
                "Host configuration object is not serializable, ignoring it"
            );
            None
        }
    }
}
