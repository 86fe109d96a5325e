//! Plain-browser adapter.
//!
//! Every capability is a placeholder that only records the request. Browser
//! permission APIs are left to the page itself.

use bridge_traits::{AdapterKind, Capability, CapabilityAdapter};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct WebAdapter;

impl WebAdapter {
    fn record(&self, capability: Capability) {
        info!(adapter = %AdapterKind::Web, capability = %capability, "Capability requested");
    }
}

impl CapabilityAdapter for WebAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Web
    }

    fn open_camera(&self) {
        self.record(Capability::Camera);
    }

    fn open_gallery(&self) {
        self.record(Capability::Gallery);
    }

    fn open_file(&self) {
        self.record(Capability::File);
    }

    fn open_qr_code(&self) {
        self.record(Capability::QrCode);
    }

    fn get_location(&self) {
        self.record(Capability::Location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_adapter_has_no_host() {
        let adapter = WebAdapter;
        assert_eq!(adapter.kind(), AdapterKind::Web);
        assert_eq!(adapter.missing_host(), None);
        for capability in Capability::ALL {
            adapter.invoke(capability);
        }
    }
}
