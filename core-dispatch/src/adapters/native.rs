//! Adapter for pages hosted by a native shell.

use bridge_traits::{AdapterKind, Capability, CapabilityAdapter, HostCommand, NativeBridge};
use std::sync::Arc;

use super::deliver;

const HOST: &str = "native bridge";

/// Forwards every capability to the injected bridge under its script method
/// name (`openCamera`, `getLocation`, ...), with no parameters.
pub struct NativeAdapter {
    bridge: Option<Arc<dyn NativeBridge>>,
}

impl NativeAdapter {
    pub fn new(bridge: Option<Arc<dyn NativeBridge>>) -> Self {
        Self { bridge }
    }

    pub fn command_for(capability: Capability) -> HostCommand {
        HostCommand::new(capability.method_name())
    }

    fn send(&self, capability: Capability) {
        deliver(
            AdapterKind::Native,
            HOST,
            self.bridge.as_deref(),
            capability,
            Self::command_for(capability),
        );
    }
}

impl CapabilityAdapter for NativeAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Native
    }

    fn open_camera(&self) {
        self.send(Capability::Camera);
    }

    fn open_gallery(&self) {
        self.send(Capability::Gallery);
    }

    fn open_file(&self) {
        self.send(Capability::File);
    }

    fn open_qr_code(&self) {
        self.send(Capability::QrCode);
    }

    fn get_location(&self) {
        self.send(Capability::Location);
    }

    fn missing_host(&self) -> Option<&'static str> {
        self.bridge.is_none().then_some(HOST)
    }
}
