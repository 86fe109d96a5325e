//! Adapter selection.
//!
//! Maps a classification to exactly one [`AdapterKind`]. Branches are checked
//! in order and the first one that holds wins; the final `Web` branch makes
//! the function total.

use bridge_traits::{AdapterKind, EnvironmentSignals};

use crate::classifier::Classification;

/// Pick the adapter variant for a classified environment.
///
/// 1. native bridge present → `Native`
/// 2. wechat / wechat-work label → `EnterpriseChat`
/// 3. dingtalk label → `CorporateIm`
/// 4. mobile user agent and host config flag set to `true` → `GenericHostApp`
/// 5. anything else → `Web`
pub fn select(classification: &Classification, signals: &EnvironmentSignals) -> AdapterKind {
    if signals.has_native_bridge() {
        return AdapterKind::Native;
    }

    if classification.platform.is_wechat_family() {
        return AdapterKind::EnterpriseChat;
    }

    if classification.platform.is_dingtalk() {
        return AdapterKind::CorporateIm;
    }

    if classification.is_mobile && signals.host_config_flag() == Some(true) {
        return AdapterKind::GenericHostApp;
    }

    AdapterKind::Web
}
