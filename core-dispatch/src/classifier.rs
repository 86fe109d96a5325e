//! Environment classification.
//!
//! Turns an [`EnvironmentSignals`] snapshot into a [`Classification`]: whether
//! the device looks mobile, and which host the page is running in. The
//! platform checks run in a fixed priority order and the first match wins:
//!
//! 1. native bridge present: its OS name, verbatim
//! 2. `micromessenger` in the user agent: `wechat-work` (with `wxwork`) or
//!    `wechat`, plus a device suffix from android/iphone/windows/macintosh
//! 3. `dingtalk` in the user agent: `dingtalk`, plus a device suffix from
//!    android/iphone only
//! 4. otherwise `Web`
//!
//! All user-agent matching is done on the lower-cased string.

use bridge_traits::EnvironmentSignals;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Device families that can appear as a label suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    Android,
    Ios,
    Windows,
    Mac,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Android => "Android",
            Device::Ios => "iOS",
            Device::Windows => "Windows",
            Device::Mac => "Mac",
        }
    }
}

/// Suffix order for the chat-client branch.
const CHAT_DEVICES: &[(&str, Device)] = &[
    ("android", Device::Android),
    ("iphone", Device::Ios),
    ("windows", Device::Windows),
    ("macintosh", Device::Mac),
];

/// Suffix order for the DingTalk branch. No desktop suffixes.
const DINGTALK_DEVICES: &[(&str, Device)] = &[
    ("android", Device::Android),
    ("iphone", Device::Ios),
];

/// Host environment detected from the signals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformKind {
    /// Native shell; carries the OS name the bridge reported
    Native(String),
    WeChat,
    WeChatWork,
    DingTalk,
    Web,
}

/// Platform label: a host kind plus an optional device suffix.
///
/// Renders as the label strings hosts expect (`"wechat-work,Android"`,
/// `"dingtalk,iOS"`, `"Web"`, or the native OS name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformLabel {
    pub kind: PlatformKind,
    pub device: Option<Device>,
}

impl PlatformLabel {
    pub fn new(kind: PlatformKind, device: Option<Device>) -> Self {
        Self { kind, device }
    }

    /// `wechat` or `wechat-work`, with or without a device suffix.
    pub fn is_wechat_family(&self) -> bool {
        matches!(self.kind, PlatformKind::WeChat | PlatformKind::WeChatWork)
    }

    pub fn is_dingtalk(&self) -> bool {
        matches!(self.kind, PlatformKind::DingTalk)
    }

    pub fn is_native(&self) -> bool {
        matches!(self.kind, PlatformKind::Native(_))
    }
}

impl fmt::Display for PlatformLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = match &self.kind {
            PlatformKind::Native(os_name) => os_name.as_str(),
            PlatformKind::WeChat => "wechat",
            PlatformKind::WeChatWork => "wechat-work",
            PlatformKind::DingTalk => "dingtalk",
            PlatformKind::Web => "Web",
        };
        match self.device {
            Some(device) => write!(f, "{},{}", base, device.as_str()),
            None => f.write_str(base),
        }
    }
}

/// Result of classifying one signal set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_mobile: bool,
    pub platform: PlatformLabel,
}

impl Classification {
    /// Label string, e.g. `"dingtalk,iOS"`.
    pub fn label(&self) -> String {
        self.platform.to_string()
    }
}

/// Classify a signal set.
pub fn classify(signals: &EnvironmentSignals) -> Classification {
    let user_agent = signals.user_agent().to_lowercase();
    Classification {
        is_mobile: is_mobile(&user_agent),
        platform: platform_label(signals, &user_agent),
    }
}

/// `true` iff the user agent contains `mobile`, case-insensitively.
pub fn is_mobile(user_agent: &str) -> bool {
    user_agent.to_lowercase().contains("mobile")
}

/// Detect the platform label. `user_agent` must already be lower-cased.
fn platform_label(signals: &EnvironmentSignals, user_agent: &str) -> PlatformLabel {
    if let Some(bridge) = signals.native_bridge() {
        // Trusted verbatim; an undefined name becomes an empty label.
        let os_name = bridge.os_name().unwrap_or_default();
        if os_name.is_empty() {
            warn!("Native bridge reported no OS name, platform label is empty");
        }
        return PlatformLabel::new(PlatformKind::Native(os_name), None);
    }

    if user_agent.contains("micromessenger") {
        let kind = if user_agent.contains("wxwork") {
            PlatformKind::WeChatWork
        } else {
            PlatformKind::WeChat
        };
        return PlatformLabel::new(kind, device_suffix(user_agent, CHAT_DEVICES));
    }

    if user_agent.contains("dingtalk") {
        return PlatformLabel::new(
            PlatformKind::DingTalk,
            device_suffix(user_agent, DINGTALK_DEVICES),
        );
    }

    PlatformLabel::new(PlatformKind::Web, None)
}

fn device_suffix(user_agent: &str, candidates: &[(&str, Device)]) -> Option<Device> {
    candidates
        .iter()
        .find(|(needle, _)| user_agent.contains(needle))
        .map(|(_, device)| *device)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_for(user_agent: &str) -> String {
        classify(&EnvironmentSignals::new(user_agent)).label()
    }

    #[test]
    fn test_wechat_work_with_device() {
        assert_eq!(
            label_for("Mozilla/5.0 (Linux; Android 10) wxwork MicroMessenger"),
            "wechat-work,Android"
        );
        assert_eq!(
            label_for("Mozilla/5.0 (Windows NT 10.0) wxwork/4.1 MicroMessenger/7.0"),
            "wechat-work,Windows"
        );
        assert_eq!(label_for("wxwork MicroMessenger"), "wechat-work");
    }

    #[test]
    fn test_wechat_with_device() {
        assert_eq!(
            label_for("Mozilla/5.0 (iPhone; CPU iPhone OS 16_0) MicroMessenger/8.0"),
            "wechat,iOS"
        );
        assert_eq!(
            label_for("Mozilla/5.0 (Macintosh; Intel Mac OS X) MicroMessenger/3.8"),
            "wechat,Mac"
        );
        assert_eq!(label_for("MicroMessenger/8.0"), "wechat");
    }

    #[test]
    fn test_dingtalk_has_no_desktop_suffix() {
        assert_eq!(label_for("Mozilla/5.0 (iPhone) DingTalk"), "dingtalk,iOS");
        assert_eq!(label_for("Mozilla/5.0 (Linux; Android 12) DingTalk/7.0"), "dingtalk,Android");
        assert_eq!(label_for("Mozilla/5.0 (Windows NT 10.0) DingTalk/7.0"), "dingtalk");
        assert_eq!(label_for("Mozilla/5.0 (Macintosh) DingTalk/7.0"), "dingtalk");
    }

    #[test]
    fn test_wechat_checked_before_dingtalk() {
        assert_eq!(label_for("DingTalk MicroMessenger Android"), "wechat,Android");
    }

    #[test]
    fn test_device_suffix_first_match_wins() {
        assert_eq!(label_for("MicroMessenger iPhone Android"), "wechat,Android");
        assert_eq!(label_for("DingTalk iphone android"), "dingtalk,Android");
        assert_eq!(label_for("MicroMessenger Windows Macintosh"), "wechat,Windows");
    }

    #[test]
    fn test_web_fallback() {
        assert_eq!(label_for("Mozilla/5.0 (X11; Linux x86_64) Firefox/120.0"), "Web");
        assert_eq!(label_for(""), "Web");
    }

    #[test]
    fn test_is_mobile_is_case_insensitive_substring() {
        assert!(is_mobile("Mozilla/5.0 (Windows NT 10.0) Mobile"));
        assert!(is_mobile("MOBILE"));
        assert!(is_mobile("automobile"));
        assert!(!is_mobile("Mozilla/5.0 (iPad)"));
        assert!(!is_mobile(""));
    }

    #[test]
    fn test_is_mobile_independent_of_platform() {
        let classification = classify(&EnvironmentSignals::new("MicroMessenger Mobile Android"));
        assert!(classification.is_mobile);
        assert_eq!(classification.label(), "wechat,Android");
    }

    #[test]
    fn test_label_display() {
        let label = PlatformLabel::new(PlatformKind::WeChatWork, Some(Device::Mac));
        assert_eq!(label.to_string(), "wechat-work,Mac");
        assert!(label.is_wechat_family());
        assert!(!label.is_dingtalk());

        let native = PlatformLabel::new(PlatformKind::Native("Android-shell".into()), None);
        assert_eq!(native.to_string(), "Android-shell");
        assert!(native.is_native());
    }
}
