//! WebAssembly Bridge
//!
//! Browser-side glue for the capability dispatcher. This crate reads the
//! page's globals (`navigator.userAgent`, the native shell's bridge object,
//! the host configuration object, host SDK objects such as `wx` and `dd`),
//! wraps the JavaScript objects as [`bridge_traits::HostSdk`] /
//! [`bridge_traits::NativeBridge`] implementations, and exports the facade to
//! JavaScript as [`HostCapabilities`].
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It will not compile for native targets.
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::{build_wasm_dispatch_config, WasmBridgeConfig};
//! use core_dispatch::CapabilityFacade;
//!
//! let config = build_wasm_dispatch_config(&WasmBridgeConfig::default())?;
//! let facade = CapabilityFacade::new(config);
//! facade.open_camera();
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod bindings;
pub mod bootstrap;
pub mod error;
pub mod host;
pub mod signals;

// Re-export commonly used types
pub use bindings::{enable_console_logging, HostCapabilities};
pub use bootstrap::{build_wasm_dispatch_config, init_console_logging};
pub use error::{WasmError, WasmResult};
pub use host::{JsHostSdk, JsNativeBridge};
pub use signals::{capture_signals, BrowserSignals, WasmBridgeConfig};
