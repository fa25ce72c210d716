//!
//! Descriptors identifying the settings group being rendered.
//!
//! A caller hands the evaluator either a bare feature id or a structured module
//! record. At the JSON boundary both shapes are accepted for the same field, so
//! the enum is untagged there while staying an explicit variant in Rust.

use serde::{Deserialize, Serialize};

/// A feature (module) identifier such as `"protect"` or `"post-by-email"`.
pub type FeatureId = String;

/// The structured form of a module as handed to a settings group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Feature id of the module. May be absent on partially populated records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<FeatureId>,
    /// Support page advertised by the module itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learn_more_button: Option<String>,
}

impl ModuleDescriptor {
    pub fn new(module: impl Into<FeatureId>) -> Self {
        ModuleDescriptor { module: Some(module.into()), learn_more_button: None }
    }

    pub fn with_learn_more(mut self, url: impl Into<String>) -> Self {
        self.learn_more_button = Some(url.into());
        self
    }
}

/// What is being shown: a raw feature id or a structured module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureDescriptor {
    Id(FeatureId),
    Module(ModuleDescriptor),
}

impl FeatureDescriptor {
    /// Returns the feature id carried by this descriptor, if any.
    ///
    /// An empty id is treated the same as a missing one.
    pub fn feature_id(&self) -> Option<&str> {
        let id = match self {
            FeatureDescriptor::Id(id) => Some(id.as_str()),
            FeatureDescriptor::Module(m) => m.module.as_deref(),
        };
        id.filter(|s| !s.is_empty())
    }

    /// Returns the module-provided learn-more URL. Bare ids never carry one.
    pub fn learn_more_url(&self) -> Option<&str> {
        match self {
            FeatureDescriptor::Id(_) => None,
            FeatureDescriptor::Module(m) => m.learn_more_button.as_deref().filter(|s| !s.is_empty()),
        }
    }
}

impl From<&str> for FeatureDescriptor {
    fn from(id: &str) -> Self {
        FeatureDescriptor::Id(id.to_string())
    }
}

impl From<String> for FeatureDescriptor {
    fn from(id: String) -> Self {
        FeatureDescriptor::Id(id)
    }
}

impl From<ModuleDescriptor> for FeatureDescriptor {
    fn from(m: ModuleDescriptor) -> Self {
        FeatureDescriptor::Module(m)
    }
}
