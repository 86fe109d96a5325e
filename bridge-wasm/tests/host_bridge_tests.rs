//! Browser tests for signal capture and JavaScript-backed host handles
//!
//! Run with `wasm-pack test --headless --chrome bridge-wasm`.

#![cfg(target_arch = "wasm32")]

use bridge_traits::{error::BridgeError, HostCommand, HostSdk, NativeBridge};
use bridge_wasm::{HostCapabilities, JsHostSdk, JsNativeBridge, WasmBridgeConfig};
use js_sys::{Function, Reflect};
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn js_object(body: &str) -> JsValue {
    Function::new_no_args(&format!("return {body};"))
        .call0(&JsValue::NULL)
        .unwrap()
}

fn set_global(name: &str, value: &JsValue) {
    let window = web_sys::window().unwrap();
    Reflect::set(&window, &JsValue::from_str(name), value).unwrap();
}

fn remove_global(name: &str) {
    let window = web_sys::window().unwrap();
    Reflect::delete_property(&window, &JsValue::from_str(name)).unwrap();
}

fn calls_of(target: &JsValue) -> Vec<String> {
    let calls = Reflect::get(target, &JsValue::from_str("calls")).unwrap();
    js_sys::Array::from(&calls)
        .iter()
        .filter_map(|value| value.as_string())
        .collect()
}

// ============================================================================
// JsHostSdk
// ============================================================================

#[wasm_bindgen_test]
fn test_sdk_resolves_dotted_paths() {
    let dd = js_object(
        "{ calls: [], biz: { util: { scan(p) { dd_calls.push('scan:' + p.type); } } } }",
    );
    // `this` inside `scan` is `biz.util`, so calls are recorded on a global.
    let calls = js_sys::Array::new();
    set_global("dd_calls", &calls);

    let sdk = JsHostSdk::new("dd", dd);
    sdk.invoke(&HostCommand::new("biz.util.scan").with_params(json!({ "type": "qrCode" })))
        .unwrap();

    assert_eq!(calls.get(0).as_string().as_deref(), Some("scan:qrCode"));
    remove_global("dd_calls");
}

#[wasm_bindgen_test]
fn test_sdk_passes_arrays_as_plain_js() {
    let wx = js_object(
        "{ calls: [], chooseImage(p) { \
           this.calls.push(Array.isArray(p.sourceType) ? p.sourceType[0] : 'map'); } }",
    );
    let sdk = JsHostSdk::new("wx", wx.clone());

    sdk.invoke(&HostCommand::new("chooseImage").with_params(json!({ "sourceType": ["camera"] })))
        .unwrap();

    assert_eq!(calls_of(&wx), vec!["camera"]);
}

#[wasm_bindgen_test]
fn test_sdk_missing_api_is_not_available() {
    let sdk = JsHostSdk::new("wx", js_object("{ config: 1 }"));

    match sdk.invoke(&HostCommand::new("scanQRCode")) {
        Err(BridgeError::NotAvailable(api)) => assert_eq!(api, "wx.scanQRCode"),
        other => panic!("expected NotAvailable, got {other:?}"),
    }

    assert!(matches!(
        sdk.invoke(&HostCommand::new("config.nested")),
        Err(BridgeError::NotAvailable(_))
    ));
}

#[wasm_bindgen_test]
fn test_sdk_exception_is_rejected() {
    let sdk = JsHostSdk::new(
        "HostApp",
        js_object("{ openCamera() { throw new Error('permission denied'); } }"),
    );

    match sdk.invoke(&HostCommand::new("openCamera")) {
        Err(BridgeError::Rejected { api, message }) => {
            assert_eq!(api, "HostApp.openCamera");
            assert_eq!(message, "permission denied");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[wasm_bindgen_test]
fn test_sdk_unrepresentable_params_are_invalid() {
    let wx = js_object("{ calls: [], getLocation(p) { this.calls.push('getLocation'); } }");
    let sdk = JsHostSdk::new("wx", wx.clone());

    // Above Number.MAX_SAFE_INTEGER, so it has no plain JS number form.
    let command = HostCommand::new("getLocation").with_params(json!({ "requestId": u64::MAX }));
    assert!(matches!(sdk.invoke(&command), Err(BridgeError::InvalidParams(_))));
    assert!(calls_of(&wx).is_empty());
}

// ============================================================================
// JsNativeBridge
// ============================================================================

#[wasm_bindgen_test]
fn test_native_bridge_reads_os_name() {
    let bridge = JsNativeBridge::new(
        "NativeBridge",
        js_object("{ os: { name: 'iOS-shell-9.2' } }"),
    );
    assert_eq!(bridge.os_name().as_deref(), Some("iOS-shell-9.2"));

    let nameless = JsNativeBridge::new("NativeBridge", js_object("{ os: {} }"));
    assert_eq!(nameless.os_name(), None);

    let no_os = JsNativeBridge::new("NativeBridge", js_object("{}"));
    assert_eq!(no_os.os_name(), None);
}

#[wasm_bindgen_test]
fn test_native_bridge_global_may_be_a_function() {
    let bridge = Function::new_no_args(
        "const bridge = function () {}; \
         bridge.os = { name: 'Android-shell' }; \
         return bridge;",
    )
    .call0(&JsValue::NULL)
    .unwrap();
    set_global("FunctionBridge", &bridge);

    let found = JsNativeBridge::from_global("FunctionBridge").unwrap();
    assert_eq!(found.os_name().as_deref(), Some("Android-shell"));
    assert!(JsNativeBridge::from_global("NoSuchBridge").is_none());

    remove_global("FunctionBridge");
}

// ============================================================================
// Configuration
// ============================================================================

#[wasm_bindgen_test]
fn test_config_from_js_options() {
    let options = js_object("{ nativeBridgeGlobal: 'AppBridge', hostFlagKey: '/app/embedded' }");
    let config = WasmBridgeConfig::from_js(options).unwrap();
    assert_eq!(config.native_bridge_global, "AppBridge");
    assert_eq!(config.host_flag_key, "/app/embedded");
    assert_eq!(config.config_global, "config");
    assert_eq!(config.corporate_im_global, "dd");

    assert_eq!(
        WasmBridgeConfig::from_js(JsValue::UNDEFINED).unwrap(),
        WasmBridgeConfig::default()
    );
}

// ============================================================================
// HostCapabilities
// ============================================================================

#[wasm_bindgen_test]
fn test_native_shell_binds_native_adapter() {
    let bridge = js_object(
        "{ calls: [], os: { name: 'iOS-shell-9.2' }, \
           openQrCode() { this.calls.push('openQrCode'); } }",
    );
    set_global("TestNativeBridge", &bridge);

    let options = js_object("{ nativeBridgeGlobal: 'TestNativeBridge' }");
    let caps = HostCapabilities::new(options).unwrap();
    assert_eq!(caps.platform_label(), "iOS-shell-9.2");
    assert_eq!(caps.adapter_kind(), "native");

    caps.open_qr_code();
    assert_eq!(calls_of(&bridge), vec!["openQrCode"]);

    remove_global("TestNativeBridge");
}

#[wasm_bindgen_test]
fn test_plain_browser_binds_web_adapter() {
    let caps = HostCapabilities::new(js_object(
        "{ nativeBridgeGlobal: 'AbsentBridge', configGlobal: 'absentConfig' }",
    ))
    .unwrap();

    // Headless browsers report a desktop user agent.
    assert_eq!(caps.platform_label(), "Web");
    assert_eq!(caps.adapter_kind(), "web");
    caps.open_camera();
    caps.get_location();
}
