//!
//! Fixtures shared by unit and integration tests (feature `test-utils`).

use crate::context::{DevModeProbe, SettingsContext};
use crate::types::{FeatureDescriptor, ModuleDescriptor};

/// A site admin on a public, linked site outside dev mode.
pub fn admin_context() -> SettingsContext {
    SettingsContext {
        user_can_manage_modules: true,
        is_site_public: true,
        is_linked: true,
        is_unavailable_in_dev_mode: Some(DevModeProbe::constant(false)),
        ..Default::default()
    }
}

/// Same as `admin_context` but without the module-management capability.
pub fn non_admin_context() -> SettingsContext {
    SettingsContext { user_can_manage_modules: false, ..admin_context() }
}

/// A context in dev mode where the group opted out and the probe reports it unavailable.
pub fn dev_mode_unavailable_context() -> SettingsContext {
    SettingsContext {
        is_dev_mode: true,
        disable_in_dev_mode: true,
        is_unavailable_in_dev_mode: Some(DevModeProbe::constant(true)),
        ..Default::default()
    }
}

/// A structured module descriptor with only the feature id set.
pub fn module(id: &str) -> FeatureDescriptor {
    FeatureDescriptor::Module(ModuleDescriptor::new(id))
}
