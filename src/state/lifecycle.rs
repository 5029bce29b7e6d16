use crate::foundation::core::Viewport;

/// Viewports narrower than this are treated as phones.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleSignal {
    /// Tab became visible again.
    VisibilityRegained,
    /// `pageshow`; `persisted` means the page came back from the back/forward cache.
    PageRestored { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryAction {
    None,
    /// Scroll to top and zero the zoom progress in place.
    SoftReset,
    /// Reload the document.
    FullReload,
}

/// Recovery from stale scroll state. Phones restored from the back/forward cache reload;
/// everything else that can be stale resets in place.
pub fn recovery_for(signal: LifecycleSignal, device: DeviceClass) -> RecoveryAction {
    let action = match (signal, device) {
        (LifecycleSignal::PageRestored { persisted: false }, _) => RecoveryAction::None,
        (LifecycleSignal::PageRestored { persisted: true }, DeviceClass::Mobile) => {
            RecoveryAction::FullReload
        }
        (LifecycleSignal::PageRestored { persisted: true }, DeviceClass::Desktop) => {
            RecoveryAction::SoftReset
        }
        (LifecycleSignal::VisibilityRegained, _) => RecoveryAction::SoftReset,
    };
    tracing::debug!(?signal, ?device, ?action, "lifecycle recovery");
    action
}

#[cfg(test)]
#[path = "../../tests/unit/state/lifecycle.rs"]
mod tests;
