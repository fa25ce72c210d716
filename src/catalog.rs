//!
//! Static feature table.
//! Records which features non-admin users may still see and which are gated
//! behind the module-management capability.

use serde::Serialize;

/// Feature id of the post-by-email module. It is exempt from the admin gate
/// but needs a linked account to be usable.
pub const POST_BY_EMAIL: &str = "post-by-email";

/// Feature id of the after-the-deadline module.
pub const AFTER_THE_DEADLINE: &str = "after-the-deadline";

/// Features gated behind the module-management capability.
pub const ADMIN_ONLY_FEATURES: &[&str] = &[
    "widget-visibility",
    "minileven",
    "contact-form",
    "sitemaps",
    "latex",
    "carousel",
    "tiled-gallery",
    "custom-content-types",
    "verification-tools",
    "markdown",
    "infinite-scroll",
    "gravatar-hovercards",
    "omnisearch",
    "custom-css",
    "sharedaddy",
    "widgets",
    "shortcodes",
    "related-posts",
    "videopress",
    "monitor",
    "sso",
    "vaultpress",
    "google-analytics",
    "seo-tools",
    "stats",
    "wordads",
    "manage",
    "likes",
    "shortlinks",
    "notes",
    "subscriptions",
    "protect",
    "enhanced-distribution",
    "comments",
    "json-api",
    "photon",
];

/// An immutable set of feature ids that bypass the admin capability gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExemptFeatureSet(&'static [&'static str]);

/// The built-in exempt set.
pub const EXEMPT_FEATURES: ExemptFeatureSet = ExemptFeatureSet(&[AFTER_THE_DEADLINE, POST_BY_EMAIL]);

impl ExemptFeatureSet {
    pub const fn new(ids: &'static [&'static str]) -> Self {
        ExemptFeatureSet(ids)
    }

    #[inline]
    pub fn contains(&self, feature_id: &str) -> bool {
        self.0.contains(&feature_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExemptFeatureSet {
    fn default() -> Self {
        EXEMPT_FEATURES
    }
}

/// How a feature relates to the admin capability gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureCategory {
    /// Visible to every user.
    Exempt,
    /// Visible only to users who can manage modules.
    AdminOnly,
}

impl FeatureCategory {
    /// Classifies `feature_id` against the built-in exempt set.
    /// Ids missing from the table are treated as admin-only.
    pub fn of(feature_id: &str) -> Self {
        Self::within(&EXEMPT_FEATURES, feature_id)
    }

    pub fn within(exempt: &ExemptFeatureSet, feature_id: &str) -> Self {
        if exempt.contains(feature_id) {
            FeatureCategory::Exempt
        } else {
            FeatureCategory::AdminOnly
        }
    }
}

/// Every feature the table knows about, with its category.
pub fn known_features() -> impl Iterator<Item = (&'static str, FeatureCategory)> {
    EXEMPT_FEATURES
        .0
        .iter()
        .map(|id| (*id, FeatureCategory::Exempt))
        .chain(ADMIN_ONLY_FEATURES.iter().map(|id| (*id, FeatureCategory::AdminOnly)))
}
