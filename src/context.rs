//!
//! Ambient flags describing the admin screen at render time.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::Arc;

/// Capability probe answering "is this feature unavailable in dev mode?".
///
/// Wraps a shareable closure so the same probe can be handed to many
/// concurrent evaluations. When read from JSON the probe is a constant bool.
#[derive(Clone)]
pub struct DevModeProbe(Arc<dyn Fn() -> bool + Send + Sync>);

impl DevModeProbe {
    pub fn new<F>(probe: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        DevModeProbe(Arc::new(probe))
    }

    /// A probe that always answers `value`.
    pub fn constant(value: bool) -> Self {
        DevModeProbe::new(move || value)
    }

    #[inline]
    pub fn is_unavailable(&self) -> bool {
        (self.0)()
    }
}

impl fmt::Debug for DevModeProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DevModeProbe(..)")
    }
}

impl<'de> Deserialize<'de> for DevModeProbe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bool::deserialize(deserializer).map(DevModeProbe::constant)
    }
}

/// Flags in effect when a settings group is rendered.
///
/// Every field is optional on the wire; a missing field takes its `Default`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsContext {
    /// Whether the current user may manage modules (site admin).
    pub user_can_manage_modules: bool,
    pub is_dev_mode: bool,
    /// Carried for the view layer; no visibility rule consults it.
    pub is_site_public: bool,
    /// Whether the current user's account is connected to the service.
    pub is_linked: bool,
    /// Per-instance request to disable the group while in dev mode.
    pub disable_in_dev_mode: bool,
    pub is_unavailable_in_dev_mode: Option<DevModeProbe>,
    /// Explicit support URL supplied by the caller.
    #[serde(alias = "supportUrl")]
    pub support: Option<String>,
    /// Nested presentation variant.
    pub has_child: bool,
}

impl SettingsContext {
    /// Runs the dev-mode probe. A missing probe means the feature is available.
    pub fn unavailable_in_dev_mode(&self) -> bool {
        self.is_unavailable_in_dev_mode
            .as_ref()
            .map(DevModeProbe::is_unavailable)
            .unwrap_or(false)
    }

    /// The explicit support URL, ignoring empty strings.
    pub fn support_url(&self) -> Option<&str> {
        self.support.as_deref().filter(|s| !s.is_empty())
    }
}
