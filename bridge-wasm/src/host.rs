//! JavaScript-backed host handles.
//!
//! [`JsHostSdk`] wraps an SDK object injected into the page (`window.wx`,
//! `window.dd`, a hosting app's global) and resolves each
//! [`HostCommand::api`] as a dotted path on it. [`JsNativeBridge`] wraps the
//! native shell's bridge object, which reports its OS through `os.name`.

use bridge_traits::{
    error::{BridgeError, Result as BridgeResult},
    HostCommand, HostSdk, NativeBridge,
};
use js_sys::{Function, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{js_message, WasmError, WasmResult};

/// A host SDK living on a JavaScript object.
#[derive(Debug, Clone)]
pub struct JsHostSdk {
    name: String,
    target: JsValue,
}

impl JsHostSdk {
    /// Wrap `target`, using `name` in logs and errors.
    pub fn new(name: impl Into<String>, target: JsValue) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }

    /// Wrap `window[global]` if it is an object or a function.
    pub fn from_global(global: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let target = Reflect::get(&window, &JsValue::from_str(global)).ok()?;
        let present = target.is_object() || target.is_function();
        present.then(|| Self::new(global, target))
    }

    /// The wrapped JavaScript object.
    pub fn target(&self) -> &JsValue {
        &self.target
    }

    /// Resolve `api` to the function and the object it should be called on.
    fn resolve(&self, api: &str) -> WasmResult<(JsValue, Function)> {
        let mut receiver = self.target.clone();
        let mut segments = api.split('.').peekable();

        while let Some(segment) = segments.next() {
            let value = Reflect::get(&receiver, &JsValue::from_str(segment))?;
            if segments.peek().is_none() {
                let function = value
                    .dyn_into::<Function>()
                    .map_err(|_| WasmError::NotCallable(format!("{}.{}", self.name, api)))?;
                return Ok((receiver, function));
            }
            if !(value.is_object() || value.is_function()) {
                return Err(WasmError::NotCallable(format!("{}.{}", self.name, api)));
            }
            receiver = value;
        }

        Err(WasmError::NotCallable(format!("{}.{}", self.name, api)))
    }
}

impl HostSdk for JsHostSdk {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn invoke(&self, command: &HostCommand) -> BridgeResult<()> {
        let (receiver, function) = self.resolve(command.api)?;

        let outcome = match &command.params {
            Value::Null => function.call0(&receiver),
            params => {
                let params = to_js(params).map_err(BridgeError::from)?;
                function.call1(&receiver, &params)
            }
        };

        outcome.map(|_| ()).map_err(|thrown| BridgeError::Rejected {
            api: format!("{}.{}", self.name, command.api),
            message: js_message(&thrown),
        })
    }
}

/// The native shell's bridge object.
///
/// Capability methods are called directly on the bridge
/// (`NativeBridge.openCamera()`), so it doubles as a [`HostSdk`].
#[derive(Debug, Clone)]
pub struct JsNativeBridge {
    sdk: JsHostSdk,
}

impl JsNativeBridge {
    /// Wrap an already resolved bridge object.
    pub fn new(name: impl Into<String>, target: JsValue) -> Self {
        Self {
            sdk: JsHostSdk::new(name, target),
        }
    }

    /// Wrap `window[global]` if the shell injected it.
    pub fn from_global(global: &str) -> Option<Self> {
        JsHostSdk::from_global(global).map(|sdk| Self { sdk })
    }
}

impl HostSdk for JsNativeBridge {
    fn name(&self) -> String {
        self.sdk.name()
    }

    fn invoke(&self, command: &HostCommand) -> BridgeResult<()> {
        self.sdk.invoke(command)
    }
}

impl NativeBridge for JsNativeBridge {
    fn os_name(&self) -> Option<String> {
        let os = Reflect::get(self.sdk.target(), &JsValue::from_str("os")).ok()?;
        if !os.is_object() {
            return None;
        }
        Reflect::get(&os, &JsValue::from_str("name")).ok()?.as_string()
    }
}

/// Convert call parameters into plain JavaScript objects.
fn to_js(params: &Value) -> WasmResult<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(params.serialize(&serializer)?)
}
