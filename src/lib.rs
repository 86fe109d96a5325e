//! Workspace umbrella crate.
//!
//! Re-exports the dispatcher so host applications can depend on
//! `hostcap-workspace` alone. Enable the `wasm` feature on `wasm32` targets to
//! pull in the browser bridge (`bridge-wasm`).

pub use bridge_traits::{
    AdapterKind, BridgeError, Capability, CapabilityAdapter, EnvironmentSignals, HostCommand,
    HostSdk, NativeBridge,
};
pub use core_dispatch::{classify, is_mobile, select, CapabilityFacade, Classification};
pub use core_runtime::{DispatchConfig, DispatchConfigBuilder, HostSdks};

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use bridge_wasm;
