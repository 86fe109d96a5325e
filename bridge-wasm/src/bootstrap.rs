//! Startup helpers for browser builds.
//!
//! [`build_wasm_dispatch_config`] turns the page's globals into a
//! [`DispatchConfig`], wiring in whichever host SDK objects are present.
//! [`init_console_logging`] routes `tracing` output to the DevTools console.

use std::sync::Arc;

use bridge_traits::sink::LogLevel;
use bridge_traits::{HostSdk, NativeBridge};
use core_runtime::DispatchConfig;
use tracing::{debug, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

use crate::error::WasmResult;
use crate::host::JsHostSdk;
use crate::signals::{capture_signals, WasmBridgeConfig};

/// Capture the browser signals and assemble a dispatcher configuration.
///
/// SDK globals that are missing are left unset; the adapter bound for that
/// host then logs the calls it cannot deliver.
///
/// # Errors
///
/// - `window`/`navigator` unavailable
/// - the host configuration object is not valid JSON after stringification
pub fn build_wasm_dispatch_config(config: &WasmBridgeConfig) -> WasmResult<DispatchConfig> {
    let signals = capture_signals(config)?;

    let mut builder = DispatchConfig::builder()
        .user_agent(signals.user_agent)
        .host_flag_key(config.host_flag_key.clone());

    if let Some(bridge) = signals.native_bridge {
        builder = builder.native_bridge(Arc::new(bridge) as Arc<dyn NativeBridge>);
    }
    if let Some(json) = signals.host_config_json {
        builder = builder.host_config_json(json);
    }
    if let Some(sdk) = sdk_global(&config.enterprise_chat_global) {
        builder = builder.enterprise_chat_sdk(sdk);
    }
    if let Some(sdk) = sdk_global(&config.corporate_im_global) {
        builder = builder.corporate_im_sdk(sdk);
    }
    if let Some(sdk) = sdk_global(&config.host_app_global) {
        builder = builder.host_app_sdk(sdk);
    }

    Ok(builder.build()?)
}

fn sdk_global(global: &str) -> Option<Arc<dyn HostSdk>> {
    let sdk = JsHostSdk::from_global(global)?;
    debug!(global, "Found host SDK global");
    Some(Arc::new(sdk))
}

/// Install `tracing-wasm` as the global subscriber and the console panic hook.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_console_logging(level: LogLevel) {
    console_error_panic_hook::set_once();

    let layer = WASMLayer::new(
        WASMLayerConfigBuilder::new()
            .set_max_level(tracing_level(level))
            .set_report_logs_in_timings(false)
            .build(),
    );

    if tracing_subscriber::registry().with(layer).try_init().is_ok() {
        debug!(level = level.as_str(), "Console logging enabled");
    }
}

fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
