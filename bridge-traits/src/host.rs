//! Host Environment Abstractions
//!
//! Models the ambient state an embedded page sees at startup: the optional
//! native bridge object, the user-agent string, and the flag from the host's
//! global configuration object. Hosts capture these once and hand them to the
//! core as an [`EnvironmentSignals`] snapshot instead of the core reading
//! globals on its own.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::{error::Result, platform::PlatformSendSync};

/// A single call into a host SDK.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostCommand {
    /// Dotted API path relative to the SDK object (e.g. `biz.util.scan`)
    pub api: &'static str,
    /// Call parameters, `null` when the API takes none
    pub params: Value,
}

impl HostCommand {
    pub fn new(api: &'static str) -> Self {
        Self {
            api,
            params: Value::Null,
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }
}

/// Host SDK trait
///
/// Wraps whatever API object a host injects into the page:
/// - **WeChat / WeCom**: `window.wx`
/// - **DingTalk**: `window.dd`
/// - **Hosting apps**: an app-specific global
///
/// Implementations only need to deliver the command. Completion callbacks and
/// results stay on the host side.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::host::{HostCommand, HostSdk};
///
/// fn scan(sdk: &dyn HostSdk) -> Result<()> {
///     sdk.invoke(&HostCommand::new("scanQRCode"))
/// }
/// ```
pub trait HostSdk: PlatformSendSync {
    /// Short identifier used in logs (`wx`, `dd`, ...).
    fn name(&self) -> String;

    /// Deliver a command to the host.
    fn invoke(&self, command: &HostCommand) -> Result<()>;
}

/// Native bridge trait
///
/// An object injected by a native shell that exposes device APIs directly,
/// bypassing browser permission prompts. Its presence alone identifies the
/// environment; the OS name it reports becomes the platform label verbatim.
pub trait NativeBridge: HostSdk {
    /// OS name reported by the shell, `None` when the field is undefined.
    fn os_name(&self) -> Option<String>;
}

/// Read-only snapshot of the host signals used for classification.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Default)]
pub struct EnvironmentSignals {
    native_bridge: Option<Arc<dyn NativeBridge>>,
    user_agent: String,
    host_config_flag: Option<bool>,
}

impl EnvironmentSignals {
    /// Snapshot with only a user-agent string.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            native_bridge: None,
            user_agent: user_agent.into(),
            host_config_flag: None,
        }
    }

    pub fn with_native_bridge(mut self, bridge: Arc<dyn NativeBridge>) -> Self {
        self.native_bridge = Some(bridge);
        self
    }

    pub fn with_host_config_flag(mut self, flag: Option<bool>) -> Self {
        self.host_config_flag = flag;
        self
    }

    pub fn native_bridge(&self) -> Option<&Arc<dyn NativeBridge>> {
        self.native_bridge.as_ref()
    }

    pub fn has_native_bridge(&self) -> bool {
        self.native_bridge.is_some()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn host_config_flag(&self) -> Option<bool> {
        self.host_config_flag
    }
}

impl fmt::Debug for EnvironmentSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentSignals")
            .field(
                "native_bridge",
                &self
                    .native_bridge
                    .as_ref()
                    .map(|bridge| format!("NativeBridge {{ os: {:?} }}", bridge.os_name())),
            )
            .field("user_agent", &self.user_agent)
            .field("host_config_flag", &self.host_config_flag)
            .finish()
    }
}
