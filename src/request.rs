//!
//! JSON boundary for callers that hand over flags as a document rather than
//! building a `SettingsContext` in Rust.
//!
//! ```json
//! {
//!   "context": { "userCanManageModules": true, "isLinked": true },
//!   "module": { "module": "protect", "learn_more_button": "https://jetpack.com/support/protect" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::context::SettingsContext;
use crate::decision::VisibilityDecision;
use crate::error::SettingsError;
use crate::evaluator::AccessEvaluator;
use crate::types::FeatureDescriptor;

/// One settings group to evaluate, with its context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub context: SettingsContext,
    /// Bare feature id or module object. Absent for an unscoped group.
    #[serde(default)]
    pub module: Option<FeatureDescriptor>,
}

impl EvaluationRequest {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "rejecting malformed evaluation request");
            SettingsError::InvalidRequest(e)
        })
    }

    /// Evaluates the request with the given evaluator.
    pub fn evaluate_with(&self, evaluator: &AccessEvaluator) -> VisibilityDecision {
        evaluator.evaluate(&self.context, self.module.as_ref())
    }
}

/// Reads and decodes a request document from `path`.
pub fn load_request(path: &Path) -> Result<EvaluationRequest, SettingsError> {
    let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    EvaluationRequest::from_json(&json)
}

/// Decodes a request document and evaluates it with the default evaluator.
///
/// # Example
///
/// ```rust
/// use settings_group_core::evaluate_json;
///
/// let decision = evaluate_json(r#"{"context": {"userCanManageModules": false}, "module": "widget-visibility"}"#).unwrap();
/// assert!(!decision.should_render);
/// ```
pub fn evaluate_json(json: &str) -> Result<VisibilityDecision, SettingsError> {
    let request = EvaluationRequest::from_json(json)?;
    Ok(request.evaluate_with(&AccessEvaluator::new()))
}
