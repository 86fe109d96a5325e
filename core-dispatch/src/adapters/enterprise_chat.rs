//! Adapter for WeChat and WeCom (`wx` JS-SDK).
//!
//! Both clients share the same SDK surface, so one adapter serves the whole
//! wechat family.

use bridge_traits::{AdapterKind, Capability, CapabilityAdapter, HostCommand, HostSdk};
use serde_json::json;
use std::sync::Arc;

use super::deliver;

const HOST: &str = "wx";

pub struct EnterpriseChatAdapter {
    sdk: Option<Arc<dyn HostSdk>>,
}

impl EnterpriseChatAdapter {
    pub fn new(sdk: Option<Arc<dyn HostSdk>>) -> Self {
        Self { sdk }
    }

    /// JS-SDK call for a capability.
    pub fn command_for(capability: Capability) -> HostCommand {
        match capability {
            Capability::Camera => HostCommand::new("chooseImage").with_params(json!({
                "count": 1,
                "sourceType": ["camera"],
            })),
            Capability::Gallery => HostCommand::new("chooseImage").with_params(json!({
                "count": 9,
                "sourceType": ["album"],
            })),
            Capability::File => HostCommand::new("chooseMessageFile").with_params(json!({
                "count": 1,
                "type": "file",
            })),
            Capability::QrCode => HostCommand::new("scanQRCode").with_params(json!({
                "needResult": 1,
                "scanType": ["qrCode"],
            })),
            Capability::Location => HostCommand::new("getLocation").with_params(json!({
                "type": "gcj02",
            })),
        }
    }

    fn send(&self, capability: Capability) {
        deliver(
            AdapterKind::EnterpriseChat,
            HOST,
            self.sdk.as_deref(),
            capability,
            Self::command_for(capability),
        );
    }
}

impl CapabilityAdapter for EnterpriseChatAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::EnterpriseChat
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
