//! Device Capability Abstraction
//!
//! Defines the fixed capability surface every host adapter implements and the
//! closed set of adapter variants the dispatcher can bind.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::platform::PlatformSendSync;

/// One of the device-facing operations exposed uniformly regardless of host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Camera,
    Gallery,
    File,
    QrCode,
    Location,
}

impl Capability {
    /// Every capability, in the order the facade exposes them.
    pub const ALL: [Capability; 5] = [
        Capability::Camera,
        Capability::Gallery,
        Capability::File,
        Capability::QrCode,
        Capability::Location,
    ];

    /// Method name as seen by script hosts (`openCamera`, `getLocation`, ...).
    pub fn method_name(&self) -> &'static str {
        match self {
            Capability::Camera => "openCamera",
            Capability::Gallery => "openGallery",
            Capability::File => "openFile",
            Capability::QrCode => "openQrCode",
            Capability::Location => "getLocation",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Adapter variant bound by the dispatcher.
///
/// Exactly one variant is live per facade for its entire lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdapterKind {
    /// Injected native shell bridge
    Native,
    /// WeChat / WeCom JS-SDK
    EnterpriseChat,
    /// DingTalk JS-API
    CorporateIm,
    /// Third-party hosting app SDK
    GenericHostApp,
    /// Plain browser
    Web,
}

impl AdapterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdapterKind::Native => "native",
            AdapterKind::EnterpriseChat => "enterprise-chat",
            AdapterKind::CorporateIm => "corporate-im",
            AdapterKind::GenericHostApp => "generic-host-app",
            AdapterKind::Web => "web",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability adapter trait
///
/// Each host environment ships one implementation. Calls are fire-and-forget:
/// the adapter owns any interaction with the host (including asynchronous
/// completion and failures) and nothing is reported back to the caller.
///
/// # Platform Support
///
/// - **Native shell**: injected bridge object
/// - **WeChat / WeCom**: `wx` JS-SDK
/// - **DingTalk**: `dd` JS-API
/// - **Hosting apps**: app-provided SDK object
/// - **Browser**: no-op placeholders
///
/// # Example
///
/// ```ignore
/// use bridge_traits::capability::{Capability, CapabilityAdapter};
///
/// fn scan(adapter: &dyn CapabilityAdapter) {
///     adapter.invoke(Capability::QrCode);
/// }
/// ```
pub trait CapabilityAdapter: PlatformSendSync {
    /// Variant this adapter implements.
    fn kind(&self) -> AdapterKind;

    fn open_camera(&self);

    fn open_gallery(&self);

    fn open_file(&self);

    fn open_qr_code(&self);

    fn get_location(&self);

    /// Dispatch by capability value.
    fn invoke(&self, capability: Capability) {
        match capability {
            Capability::Camera => self.open_camera(),
            Capability::Gallery => self.open_gallery(),
            Capability::File => self.open_file(),
            Capability::QrCode => self.open_qr_code(),
            Capability::Location => self.get_location(),
        }
    }

    /// Name of the host handle this adapter needs but was not given.
    ///
    /// Adapters without an external dependency always return `None`.
    fn missing_host(&self) -> Option<&'static str> {
        None
    }
}
