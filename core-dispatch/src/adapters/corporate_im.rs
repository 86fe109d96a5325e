//! Adapter for DingTalk (`dd` JS-API).

use bridge_traits::{AdapterKind, Capability, CapabilityAdapter, HostCommand, HostSdk};
use serde_json::json;
use std::sync::Arc;

use super::deliver;

const HOST: &str = "dd";

pub struct CorporateImAdapter {
    sdk: Option<Arc<dyn HostSdk>>,
}

impl CorporateImAdapter {
    pub fn new(sdk: Option<Arc<dyn HostSdk>>) -> Self {
        Self { sdk }
    }

    /// JS-API call for a capability. Paths are relative to `dd`.
    pub fn command_for(capability: Capability) -> HostCommand {
        match capability {
            Capability::Camera => HostCommand::new("biz.util.uploadImageFromCamera")
                .with_params(json!({ "compression": true })),
            Capability::Gallery => HostCommand::new("biz.util.uploadImage")
                .with_params(json!({ "multiple": true, "max": 9 })),
            Capability::File => HostCommand::new("biz.util.uploadAttachment")
                .with_params(json!({ "types": ["file"] })),
            Capability::QrCode => {
                HostCommand::new("biz.util.scan").with_params(json!({ "type": "qrCode" }))
            }
            Capability::Location => HostCommand::new("device.geolocation.get")
                .with_params(json!({ "targetAccuracy": 200, "coordinate": 1 })),
        }
    }

    fn send(&self, capability: Capability) {
        deliver(
            AdapterKind::CorporateIm,
            HOST,
            self.sdk.as_deref(),
            capability,
            Self::command_for(capability),
        );
    }
}

impl CapabilityAdapter for CorporateImAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::CorporateIm
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
