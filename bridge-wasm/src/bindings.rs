//! JavaScript bindings for the capability facade.
//!
//! ```javascript
//! import init, { HostCapabilities, enableConsoleLogging } from "./bridge_wasm.js";
//!
//! await init();
//! enableConsoleLogging("debug");
//!
//! const caps = new HostCapabilities({ nativeBridgeGlobal: "AppBridge" });
//! console.log(caps.platformLabel, caps.adapterKind, caps.isMobile);
//! caps.openQrCode();
//! ```

use bridge_traits::sink::LogLevel;
use core_dispatch::CapabilityFacade;
use wasm_bindgen::prelude::*;

use crate::bootstrap::{build_wasm_dispatch_config, init_console_logging};
use crate::signals::WasmBridgeConfig;

/// Capability facade bound to the current page.
#[wasm_bindgen]
pub struct HostCapabilities {
    facade: CapabilityFacade,
}

#[wasm_bindgen]
impl HostCapabilities {
    /// Detect the host environment and bind an adapter.
    ///
    /// `options` may override global names (`nativeBridgeGlobal`,
    /// `configGlobal`, `hostFlagKey`, `enterpriseChatGlobal`,
    /// `corporateImGlobal`, `hostAppGlobal`). Pass `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<HostCapabilities, JsValue> {
        let config = WasmBridgeConfig::from_js(options)?;
        let dispatch = build_wasm_dispatch_config(&config)?;
        Ok(Self {
            facade: CapabilityFacade::new(dispatch),
        })
    }

    /// Take a photo with the device camera.
    #[wasm_bindgen(js_name = openCamera)]
    pub fn open_camera(&self) {
        self.facade.open_camera();
    }

    /// Pick images from the gallery.
    #[wasm_bindgen(js_name = openGallery)]
    pub fn open_gallery(&self) {
        self.facade.open_gallery();
    }

    /// Pick a file.
    #[wasm_bindgen(js_name = openFile)]
    pub fn open_file(&self) {
        self.facade.open_file();
    }

    /// Scan a QR code.
    #[wasm_bindgen(js_name = openQrCode)]
    pub fn open_qr_code(&self) {
        self.facade.open_qr_code();
    }

    /// Request the current location.
    #[wasm_bindgen(js_name = getLocation)]
    pub fn get_location(&self) {
        self.facade.get_location();
    }

    /// Detected platform label, e.g. `wechat-work,Android`.
    #[wasm_bindgen(getter, js_name = platformLabel)]
    pub fn platform_label(&self) -> String {
        self.facade.platform_label()
    }

    /// Whether the user agent reports a mobile device.
    #[wasm_bindgen(getter, js_name = isMobile)]
    pub fn is_mobile(&self) -> bool {
        self.facade.is_mobile()
    }

    /// One of `native`, `enterprise-chat`, `corporate-im`,
    /// `generic-host-app`, `web`.
    #[wasm_bindgen(getter, js_name = adapterKind)]
    pub fn adapter_kind(&self) -> String {
        self.facade.adapter_kind().as_str().to_string()
    }
}

/// Send Rust logs to the browser console. `level` is one of `trace`, `debug`,
/// `info`, `warn`, `error`; anything else means `info`.
#[wasm_bindgen(js_name = enableConsoleLogging)]
pub fn enable_console_logging(level: Option<String>) {
    let level = match level.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => LogLevel::Trace,
        Some("debug") => LogLevel::Debug,
        Some("warn") => LogLevel::Warn,
        Some("error") => LogLevel::Error,
        _ => LogLevel::Info,
    };
    init_console_logging(level);
}
