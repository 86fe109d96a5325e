//! Capability adapter implementations.
//!
//! One adapter per [`AdapterKind`]. The four host adapters translate each
//! capability into a [`HostCommand`] and hand it to their host handle; the web
//! adapter only logs. None of them report failures to the caller.

mod corporate_im;
mod enterprise_chat;
mod host_app;
mod native;
mod web;

pub use corporate_im::CorporateImAdapter;
pub use enterprise_chat::EnterpriseChatAdapter;
pub use host_app::HostAppAdapter;
pub use native::NativeAdapter;
pub use web::WebAdapter;

use bridge_traits::{
    AdapterKind, BridgeError, Capability, CapabilityAdapter, HostCommand, HostSdk,
};
use core_runtime::DispatchConfig;
use tracing::{debug, warn};

/// Build the adapter for `kind`, wiring in whatever host handle it needs.
pub fn build_adapter(kind: AdapterKind, config: &DispatchConfig) -> Box<dyn CapabilityAdapter> {
    match kind {
        AdapterKind::Native => {
            Box::new(NativeAdapter::new(config.signals.native_bridge().cloned()))
        }
        AdapterKind::EnterpriseChat => {
            Box::new(EnterpriseChatAdapter::new(config.sdks.enterprise_chat.clone()))
        }
        AdapterKind::CorporateIm => {
            Box::new(CorporateImAdapter::new(config.sdks.corporate_im.clone()))
        }
        AdapterKind::GenericHostApp => Box::new(HostAppAdapter::new(config.sdks.host_app.clone())),
        AdapterKind::Web => Box::new(WebAdapter),
    }
}

/// Send `command` through `sdk`, logging instead of failing.
fn deliver<S>(
    kind: AdapterKind,
    host: &'static str,
    sdk: Option<&S>,
    capability: Capability,
    command: HostCommand,
) where
    S: HostSdk + ?Sized,
{
    let Some(sdk) = sdk else {
        let err = BridgeError::NotAvailable(host.to_string());
        warn!(
            adapter = %kind,
            capability = %capability,
            error = %err,
            "Capability call dropped"
        );
        return;
    };

    debug!(
        adapter = %kind,
        capability = %capability,
        api = command.api,
        "Forwarding capability call"
    );

    if let Err(err) = sdk.invoke(&command) {
        warn!(
            adapter = %kind,
            capability = %capability,
            api = command.api,
            error = %err,
            "Host capability call failed"
        );
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{MockBridge, MockSdk};
    use super::*;
    use bridge_traits::EnvironmentSignals;
    use core_runtime::HostSdks;
    use std::sync::Arc;

    #[test]
    fn test_build_adapter_matches_kind() {
        let config = DispatchConfig::default();
        let kinds = [
            AdapterKind::Native,
            AdapterKind::EnterpriseChat,
            AdapterKind::CorporateIm,
            AdapterKind::GenericHostApp,
            AdapterKind::Web,
        ];
        for kind in kinds {
            assert_eq!(build_adapter(kind, &config).kind(), kind);
        }
    }

    #[test]
    fn test_build_adapter_reports_missing_hosts() {
        let config = DispatchConfig::default();
        assert_eq!(
            build_adapter(AdapterKind::EnterpriseChat, &config).missing_host(),
            Some("wx")
        );
        assert_eq!(
            build_adapter(AdapterKind::CorporateIm, &config).missing_host(),
            Some("dd")
        );
        assert_eq!(
            build_adapter(AdapterKind::Native, &config).missing_host(),
            Some("native bridge")
        );
        assert_eq!(build_adapter(AdapterKind::Web, &config).missing_host(), None);
    }

    #[test]
    fn test_build_adapter_wires_handles() {
        let mut bridge = MockBridge::new();
        bridge.expect_os_name().return_const(Some("iOS".to_string()));
        let config = DispatchConfig {
            signals: EnvironmentSignals::new("").with_native_bridge(Arc::new(bridge)),
            sdks: HostSdks {
                host_app: Some(Arc::new(MockSdk::new())),
                ..HostSdks::default()
            },
        };

        assert_eq!(build_adapter(AdapterKind::Native, &config).missing_host(), None);
        assert_eq!(
            build_adapter(AdapterKind::GenericHostApp, &config).missing_host(),
            None
        );
    }

    #[test]
    fn test_deliver_swallows_host_errors() {
        let mut sdk = MockSdk::new();
        sdk.expect_invoke()
            .times(1)
            .returning(|_| Err(BridgeError::OperationFailed("permission denied".into())));

        deliver(
            AdapterKind::GenericHostApp,
            "host app",
            Some(&sdk),
            Capability::Camera,
            HostCommand::new("openCamera"),
        );
    }

    #[test]
    fn test_deliver_without_sdk_is_a_no_op() {
        deliver::<MockSdk>(
            AdapterKind::CorporateIm,
            "dd",
            None,
            Capability::Location,
            HostCommand::new("device.geolocation.get"),
        );
    }
}
