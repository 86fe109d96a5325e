//! Adapter for third-party hosting apps that expose their own SDK object.

use bridge_traits::{AdapterKind, Capability, CapabilityAdapter, HostCommand, HostSdk};
use std::sync::Arc;

use super::deliver;

const HOST: &str = "host app";

pub struct HostAppAdapter {
    sdk: Option<Arc<dyn HostSdk>>,
}

impl HostAppAdapter {
    pub fn new(sdk: Option<Arc<dyn HostSdk>>) -> Self {
        Self { sdk }
    }

    pub fn command_for(capability: Capability) -> HostCommand {
        match capability {
            Capability::Camera => HostCommand::new("openCamera"),
            Capability::Gallery => HostCommand::new("openGallery"),
            Capability::File => HostCommand::new("openFile"),
            Capability::QrCode => HostCommand::new("scanQrCode"),
            Capability::Location => HostCommand::new("getLocation"),
        }
    }

    fn send(&self, capability: Capability) {
        deliver(
            AdapterKind::GenericHostApp,
            HOST,
            self.sdk.as_deref(),
            capability,
            Self::command_for(capability),
        );
    }
}

impl CapabilityAdapter for HostAppAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::GenericHostApp
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
        self.sdk.is_none().then_some(HOST)
    }
}
