//! # Host Bridge Traits
//!
//! Contracts between an embedding host and the capability dispatcher.
//!
//! ## Overview
//!
//! A page can run inside several containers: a native shell that injects a
//! bridge object, a chat client (WeChat / WeCom, DingTalk) with its own JS-SDK,
//! a third-party hosting app, or a plain browser. This crate defines what the
//! core needs from each of them and what it offers back.
//!
//! ## Traits
//!
//! ### Capabilities
//! - [`CapabilityAdapter`](capability::CapabilityAdapter) - The five device
//!   operations (camera, gallery, file, QR code, location)
//!
//! ### Host Integration
//! - [`NativeBridge`](host::NativeBridge) - Injected native shell object
//! - [`HostSdk`](host::HostSdk) - Chat client or hosting app API object
//! - [`EnvironmentSignals`](host::EnvironmentSignals) - Startup snapshot used
//!   for classification
//!
//! ### Utilities
//! - [`LoggerSink`](sink::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Host            | Adapter variant  | Host handle       |
//! |-----------------|------------------|-------------------|
//! | Native shell    | `Native`         | `NativeBridge`    |
//! | WeChat / WeCom  | `EnterpriseChat` | `HostSdk` (`wx`)  |
//! | DingTalk        | `CorporateIm`    | `HostSdk` (`dd`)  |
//! | Hosting app     | `GenericHostApp` | `HostSdk`         |
//! | Browser         | `Web`            | none              |
//!
//! ## Error Handling
//!
//! Host handles report failures as [`BridgeError`](error::BridgeError).
//! Adapters log these and never propagate them to the caller: capability calls
//! are fire-and-forget.
//!
//! ## Thread Safety
//!
//! Every trait here is bounded by
//! [`PlatformSendSync`](platform::PlatformSendSync), i.e. `Send + Sync` on
//! native targets and unbounded on `wasm32`.

pub mod capability;
pub mod error;
pub mod host;
pub mod platform;
pub mod sink;

pub use error::BridgeError;

// Re-export commonly used types
pub use capability::{AdapterKind, Capability, CapabilityAdapter};
pub use host::{EnvironmentSignals, HostCommand, HostSdk, NativeBridge};
pub use sink::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
