#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Settings-group visibility rules for an administrative settings screen.
//!
//! Given the flags in effect for a render (`SettingsContext`) and the feature a
//! group belongs to (`FeatureDescriptor`), the `AccessEvaluator` decides whether
//! the group renders, whether it offers a learn-more link and whether it is
//! shown faded. Rendering itself is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use settings_group_core::{evaluate, FeatureDescriptor, ModuleDescriptor, SettingsContext};
//!
//! let context = SettingsContext {
//!     user_can_manage_modules: true,
//!     is_linked: true,
//!     ..Default::default()
//! };
//! let module = FeatureDescriptor::Module(
//!     ModuleDescriptor::new("protect").with_learn_more("https://jetpack.com/support/protect"),
//! );
//!
//! let decision = evaluate(&context, Some(&module));
//! assert!(decision.should_render);
//! assert_eq!(decision.learn_more_url.as_deref(), Some("https://jetpack.com/support/protect"));
//! assert!(!decision.is_faded);
//! ```

// Descriptor types (feature ids, module records).
pub mod types;

// Render-time flags and the dev-mode probe.
pub mod context;

// Static feature table and the exempt set.
pub mod catalog;

pub mod decision;

// Visibility rules.
pub mod evaluator;

pub mod error;

// JSON request boundary.
pub mod request;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use catalog::{ExemptFeatureSet, FeatureCategory, EXEMPT_FEATURES};
pub use context::{DevModeProbe, SettingsContext};
pub use decision::VisibilityDecision;
pub use error::SettingsError;
pub use evaluator::AccessEvaluator;
pub use request::{evaluate_json, load_request, EvaluationRequest};
pub use types::{FeatureDescriptor, FeatureId, ModuleDescriptor};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluates one settings group with the built-in exempt set.
pub fn evaluate(context: &SettingsContext, descriptor: Option<&FeatureDescriptor>) -> VisibilityDecision {
    AccessEvaluator::new().evaluate(context, descriptor)
}
