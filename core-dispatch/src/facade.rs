//! Capability facade held by the application.

use bridge_traits::{AdapterKind, Capability, CapabilityAdapter};
use core_runtime::{DispatchConfig, Error, Result};
use std::fmt;
use tracing::info;

use crate::adapters::build_adapter;
use crate::classifier::{classify, Classification};
use crate::selector::select;

/// Entry point for capability calls.
///
/// Classification and adapter selection happen once, in the constructor. The
/// bound adapter is kept for the lifetime of the facade; later changes in the
/// host environment are not picked up.
pub struct CapabilityFacade {
    classification: Classification,
    adapter: Box<dyn CapabilityAdapter>,
}

impl CapabilityFacade {
    /// Classify the configured environment and bind an adapter. Never fails:
    /// unrecognised environments fall back to the web adapter.
    pub fn new(config: DispatchConfig) -> Self {
        let classification = classify(&config.signals);
        let kind = select(&classification, &config.signals);
        let adapter = build_adapter(kind, &config);

        info!(
            platform = %classification.platform,
            is_mobile = classification.is_mobile,
            adapter = %kind,
            "Host capabilities bound"
        );

        Self {
            classification,
            adapter,
        }
    }

    /// Like [`new`](Self::new), but refuses to bind an adapter whose host
    /// handle is missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`] naming the absent host handle.
    pub fn try_new(config: DispatchConfig) -> Result<Self> {
        let facade = Self::new(config);
        match facade.adapter.missing_host() {
            Some(host) => Err(Error::CapabilityMissing {
                capability: host.to_string(),
                message: format!(
                    "Environment '{}' selects the {} adapter, but no {} handle was provided. \
                     Inject it through DispatchConfig.",
                    facade.classification.platform,
                    facade.adapter.kind(),
                    host
                ),
            }),
            None => Ok(facade),
        }
    }

    pub fn open_camera(&self) {
        self.adapter.open_camera();
    }

    pub fn open_gallery(&self) {
        self.adapter.open_gallery();
    }

    pub fn open_file(&self) {
        self.adapter.open_file();
    }

    pub fn open_qr_code(&self) {
        self.adapter.open_qr_code();
    }

    pub fn get_location(&self) {
        self.adapter.get_location();
    }

    /// Delegate by capability value.
    pub fn dispatch(&self, capability: Capability) {
        self.adapter.invoke(capability);
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Label string, e.g. `"wechat-work,Android"`.
    pub fn platform_label(&self) -> String {
        self.classification.label()
    }

    pub fn is_mobile(&self) -> bool {
        self.classification.is_mobile
    }

    pub fn adapter_kind(&self) -> AdapterKind {
        self.adapter.kind()
    }
}

impl fmt::Debug for CapabilityFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityFacade")
            .field("classification", &self.classification)
            .field("adapter", &self.adapter.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::test_support::MockSdk;
    use bridge_traits::HostCommand;
    use mockall::predicate::function;
    use std::sync::Arc;

    #[test]
    fn test_default_config_binds_web() {
        let facade = CapabilityFacade::new(DispatchConfig::default());
        assert_eq!(facade.adapter_kind(), AdapterKind::Web);
        assert_eq!(facade.platform_label(), "Web");
        assert!(!facade.is_mobile());
    }

    #[test]
    fn test_delegates_to_bound_adapter() {
        let mut sdk = MockSdk::new();
        sdk.expect_invoke()
            .with(function(|command: &HostCommand| command.api == "biz.util.scan"))
            .times(2)
            .returning(|_| Ok(()));

        let config = DispatchConfig::builder()
            .user_agent("Mozilla/5.0 (iPhone) DingTalk")
            .corporate_im_sdk(Arc::new(sdk))
            .build()
            .unwrap();

        let facade = CapabilityFacade::new(config);
        facade.open_qr_code();
        facade.dispatch(Capability::QrCode);
    }

    #[test]
    fn test_try_new_reports_missing_sdk() {
        let config = DispatchConfig::builder()
            .user_agent("MicroMessenger")
            .build()
            .unwrap();

        match CapabilityFacade::try_new(config) {
            Err(Error::CapabilityMissing { capability, message }) => {
                assert_eq!(capability, "wx");
                assert!(message.contains("enterprise-chat"));
            }
            other => panic!("expected CapabilityMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_try_new_accepts_web() {
        let facade = CapabilityFacade::try_new(DispatchConfig::default()).unwrap();
        assert_eq!(facade.adapter_kind(), AdapterKind::Web);
    }

    #[test]
    fn test_debug_output() {
        let facade = CapabilityFacade::new(DispatchConfig::default());
        let rendered = format!("{facade:?}");
        assert!(rendered.contains("CapabilityFacade"));
        assert!(rendered.contains("Web"));
    }
}
