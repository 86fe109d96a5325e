//! # Dispatch Configuration Module
//!
//! Provides configuration management for the capability dispatcher.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`DispatchConfig`] holding everything the dispatcher reads at construction:
//! the [`EnvironmentSignals`] snapshot and the host SDK handles adapters call
//! into. Ambient state is passed in explicitly; the builder never looks at
//! process or browser globals.
//!
//! ## Host configuration flag
//!
//! Hosting apps announce themselves through a global configuration object.
//! The builder accepts that object either as a parsed JSON value or as raw
//! JSON text and reads a boolean under a configurable key (default
//! [`DEFAULT_HOST_FLAG_KEY`]). Keys starting with `/` are treated as JSON
//! pointers. Only a JSON `true`/`false` sets the flag; anything else leaves it
//! unset. An explicit [`DispatchConfigBuilder::host_config_flag`] always wins.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::DispatchConfig;
//! use std::sync::Arc;
//!
//! let config = DispatchConfig::builder()
//!     .user_agent(navigator_user_agent)
//!     .host_config_json(r#"{ "isApp": true }"#)
//!     .enterprise_chat_sdk(Arc::new(WxSdk::new()))
//!     .corporate_im_sdk(Arc::new(DdSdk::new()))
//!     .build()?;
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use core_runtime::config::DispatchConfig;
//!
//! let result = DispatchConfig::builder()
//!     .host_config_json("{ not json")
//!     .build();
//! assert!(result.is_err());
//! ```

use crate::error::{Error, Result};
use crate::logging::abbreviate_user_agent;
use bridge_traits::{EnvironmentSignals, HostSdk, NativeBridge};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Key read from the host's global configuration object by default.
pub const DEFAULT_HOST_FLAG_KEY: &str = "isApp";

/// Host SDK handles available to adapters.
///
/// Every handle is optional: the dispatcher binds an adapter even when its SDK
/// is missing, and that adapter logs each call it cannot deliver.
#[derive(Clone, Default)]
pub struct HostSdks {
    /// WeChat / WeCom JS-SDK (`wx`)
    pub enterprise_chat: Option<Arc<dyn HostSdk>>,

    /// DingTalk JS-API (`dd`)
    pub corporate_im: Option<Arc<dyn HostSdk>>,

    /// Third-party hosting app SDK
    pub host_app: Option<Arc<dyn HostSdk>>,
}

impl fmt::Debug for HostSdks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostSdks")
            .field(
                "enterprise_chat",
                &self.enterprise_chat.as_ref().map(|sdk| sdk.name()),
            )
            .field(
                "corporate_im",
                &self.corporate_im.as_ref().map(|sdk| sdk.name()),
            )
            .field("host_app", &self.host_app.as_ref().map(|sdk| sdk.name()))
            .finish()
    }
}

/// Everything the dispatcher reads at construction time.
///
/// Use [`DispatchConfig::builder`] to construct instances.
#[derive(Clone, Debug, Default)]
pub struct DispatchConfig {
    /// Startup snapshot used for classification
    pub signals: EnvironmentSignals,

    /// SDK handles for the non-native host adapters
    pub sdks: HostSdks,
}

impl DispatchConfig {
    /// Creates a new builder for constructing a `DispatchConfig`.
    pub fn builder() -> DispatchConfigBuilder {
        DispatchConfigBuilder::default()
    }

    /// Configuration with the given signals and no host SDKs.
    pub fn from_signals(signals: EnvironmentSignals) -> Self {
        Self {
            signals,
            sdks: HostSdks::default(),
        }
    }
}

/// Builder for [`DispatchConfig`].
#[derive(Default)]
pub struct DispatchConfigBuilder {
    user_agent: Option<String>,
    native_bridge: Option<Arc<dyn NativeBridge>>,
    host_config_flag: Option<bool>,
    host_config_object: Option<Value>,
    host_config_json: Option<String>,
    host_flag_key: Option<String>,
    sdks: HostSdks,
}

impl DispatchConfigBuilder {
    /// User-agent string as reported by the page. Missing means empty.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Native bridge object injected by a native shell.
    pub fn native_bridge(mut self, bridge: Arc<dyn NativeBridge>) -> Self {
        self.native_bridge = Some(bridge);
        self
    }

    /// Set the host configuration flag directly.
    pub fn host_config_flag(mut self, flag: bool) -> Self {
        self.host_config_flag = Some(flag);
        self
    }

    /// Host global configuration object, already parsed.
    pub fn host_config_object(mut self, object: Value) -> Self {
        self.host_config_object = Some(object);
        self
    }

    /// Host global configuration object as JSON text. Parsed in [`build`](Self::build).
    pub fn host_config_json(mut self, json: impl Into<String>) -> Self {
        self.host_config_json = Some(json.into());
        self
    }

    /// Key (or JSON pointer) holding the flag inside the configuration object.
    pub fn host_flag_key(mut self, key: impl Into<String>) -> Self {
        self.host_flag_key = Some(key.into());
        self
    }

    pub fn enterprise_chat_sdk(mut self, sdk: Arc<dyn HostSdk>) -> Self {
        self.sdks.enterprise_chat = Some(sdk);
        self
    }

    pub fn corporate_im_sdk(mut self, sdk: Arc<dyn HostSdk>) -> Self {
        self.sdks.corporate_im = Some(sdk);
        self
    }

    pub fn host_app_sdk(mut self, sdk: Arc<dyn HostSdk>) -> Self {
        self.sdks.host_app = Some(sdk);
        self
    }

    /// Validate inputs and produce the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the flag key is blank or both a parsed object
    ///   and JSON text were supplied
    /// - [`Error::HostConfig`] if the JSON text does not parse
    pub fn build(self) -> Result<DispatchConfig> {
        let key = self
            .host_flag_key
            .unwrap_or_else(|| DEFAULT_HOST_FLAG_KEY.to_string());
        if key.trim().is_empty() {
            return Err(Error::Config("Host flag key cannot be empty".to_string()));
        }

        let object = match (self.host_config_object, self.host_config_json) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(
                    "Provide the host configuration either as a value or as JSON text, not both"
                        .to_string(),
                ))
            }
            (Some(object), None) => Some(object),
            (None, Some(text)) => Some(serde_json::from_str::<Value>(&text)?),
            (None, None) => None,
        };

        let flag = self
            .host_config_flag
            .or_else(|| object.as_ref().and_then(|object| read_host_flag(object, &key)));

        let mut signals = EnvironmentSignals::new(self.user_agent.unwrap_or_default())
            .with_host_config_flag(flag);
        if let Some(bridge) = self.native_bridge {
            signals = signals.with_native_bridge(bridge);
        }

        debug!(
            user_agent = %abbreviate_user_agent(signals.user_agent(), 64),
            native_bridge = signals.has_native_bridge(),
            host_config_flag = ?flag,
            "Dispatch configuration built"
        );

        Ok(DispatchConfig {
            signals,
            sdks: self.sdks,
        })
    }
}

/// Read the host flag from a configuration object.
///
/// `key` is either a top-level property name or a JSON pointer (`/a/b`).
/// Returns `None` unless the value is a JSON boolean.
pub fn read_host_flag(object: &Value, key: &str) -> Option<bool> {
    let value = if key.starts_with('/') {
        object.pointer(key)
    } else {
        object.get(key)
    };
    value.and_then(Value::as_bool)
}
