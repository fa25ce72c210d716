//!
//! Visibility rules for settings groups.
//!
//! `AccessEvaluator` maps a `SettingsContext` and an optional `FeatureDescriptor`
//! to a `VisibilityDecision`. Evaluation is total and side-effect free apart
//! from invoking the caller's dev-mode probe.

use crate::catalog::{ExemptFeatureSet, EXEMPT_FEATURES, POST_BY_EMAIL};
use crate::context::SettingsContext;
use crate::decision::VisibilityDecision;
use crate::types::FeatureDescriptor;

/// Evaluates settings-group visibility against a fixed exempt set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessEvaluator {
    exempt: ExemptFeatureSet,
}

impl AccessEvaluator {
    /// Creates an evaluator using the built-in exempt set.
    pub const fn new() -> Self {
        AccessEvaluator { exempt: EXEMPT_FEATURES }
    }

    pub const fn with_exempt(exempt: ExemptFeatureSet) -> Self {
        AccessEvaluator { exempt }
    }

    pub fn exempt(&self) -> &ExemptFeatureSet {
        &self.exempt
    }

    /// Computes the full decision for one settings group.
    ///
    /// # Arguments
    /// * `context` - Flags in effect for the current render.
    /// * `descriptor` - The feature being shown, or `None` for an unscoped group.
    ///
    /// # Returns
    /// A fully populated `VisibilityDecision`. A group hidden by the capability
    /// gate gets neutral values for everything except `has_child_styling`.
    pub fn evaluate(
        &self,
        context: &SettingsContext,
        descriptor: Option<&FeatureDescriptor>,
    ) -> VisibilityDecision {
        let feature_id = descriptor.and_then(FeatureDescriptor::feature_id);

        if !self.can_render(context, feature_id) {
            tracing::debug!(
                feature = feature_id.unwrap_or_default(),
                "settings group hidden: user cannot manage modules"
            );
            return VisibilityDecision::suppressed(context.has_child);
        }

        let learn_more_url = resolve_learn_more(context, descriptor).map(str::to_owned);
        let decision = VisibilityDecision {
            should_render: true,
            show_learn_more: learn_more_url.is_some(),
            learn_more_url,
            is_faded: is_faded(context, feature_id),
            has_child_styling: context.has_child,
        };

        tracing::trace!(feature = feature_id.unwrap_or_default(), ?decision, "settings group evaluated");
        decision
    }

    /// Evaluates every group on a settings page, preserving input order.
    pub fn evaluate_all(
        &self,
        context: &SettingsContext,
        descriptors: &[FeatureDescriptor],
    ) -> Vec<VisibilityDecision> {
        descriptors
            .iter()
            .map(|d| self.evaluate(context, Some(d)))
            .collect()
    }

    /// Capability gate: a scoped group is hidden from users who cannot manage
    /// modules unless its feature is exempt.
    #[inline]
    pub fn can_render(&self, context: &SettingsContext, feature_id: Option<&str>) -> bool {
        match feature_id {
            Some(id) => context.user_can_manage_modules || self.exempt.contains(id),
            None => true,
        }
    }
}

impl Default for AccessEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the learn-more URL: the explicit support URL first, then the one
/// carried by a structured module.
pub fn resolve_learn_more<'a>(
    context: &'a SettingsContext,
    descriptor: Option<&'a FeatureDescriptor>,
) -> Option<&'a str> {
    context
        .support_url()
        .or_else(|| descriptor.and_then(FeatureDescriptor::learn_more_url))
}

/// Fade conditions, either of which is sufficient:
/// the group opted out of dev mode and the probe reports it unavailable, or
/// it is post-by-email and the user's account is not linked.
pub fn is_faded(context: &SettingsContext, feature_id: Option<&str>) -> bool {
    let dev_mode_unavailable =
        context.is_dev_mode && context.disable_in_dev_mode && context.unavailable_in_dev_mode();
    let unlinked_post_by_email = feature_id == Some(POST_BY_EMAIL) && !context.is_linked;
    dev_mode_unavailable || unlinked_post_by_email
}
