#![cfg(test)]

//! Product scenarios for settings groups on the admin screen.

use settings_group_core::catalog::{ADMIN_ONLY_FEATURES, AFTER_THE_DEADLINE, POST_BY_EMAIL};
use settings_group_core::testing::{admin_context, dev_mode_unavailable_context, module, non_admin_context};
use settings_group_core::{AccessEvaluator, FeatureDescriptor, ModuleDescriptor, SettingsContext, VisibilityDecision};

const PROTECT_SUPPORT: &str = "https://jetpack.com/support/protect";

fn protect_module() -> FeatureDescriptor {
    FeatureDescriptor::Module(ModuleDescriptor::new("protect").with_learn_more(PROTECT_SUPPORT))
}

#[test]
fn nested_group_gets_child_styling_and_explicit_link() {
    let ctx = SettingsContext { support: Some(PROTECT_SUPPORT.to_string()), has_child: true, ..admin_context() };
    let d = AccessEvaluator::new().evaluate(&ctx, None);
    assert!(d.has_child_styling);
    assert!(d.show_learn_more);
    assert_eq!(d.learn_more_url.as_deref(), Some(PROTECT_SUPPORT));
}

#[test]
fn learn_more_falls_back_to_module_link() {
    let module = FeatureDescriptor::Module(ModuleDescriptor {
        module: None,
        learn_more_button: Some(PROTECT_SUPPORT.to_string()),
    });
    let d = AccessEvaluator::new().evaluate(&admin_context(), Some(&module));
    assert!(d.show_learn_more);
}

#[test]
fn bare_group_has_no_learn_more() {
    let d = AccessEvaluator::new().evaluate(&SettingsContext::default(), None);
    assert!(d.should_render);
    assert!(!d.show_learn_more);
    assert!(!d.is_faded);
}

#[test]
fn dev_mode_fading_layer() {
    assert!(AccessEvaluator::new().evaluate(&dev_mode_unavailable_context(), None).is_faded);
}

#[test]
fn post_by_email_fading_follows_link_status() {
    let evaluator = AccessEvaluator::new();
    let unlinked = SettingsContext { is_linked: false, ..admin_context() };
    assert!(evaluator.evaluate(&unlinked, Some(&module(POST_BY_EMAIL))).is_faded);
    assert!(!evaluator.evaluate(&admin_context(), Some(&module(POST_BY_EMAIL))).is_faded);
}

#[test]
fn non_admin_cannot_see_gated_groups() {
    let evaluator = AccessEvaluator::new();
    let ctx = non_admin_context();
    for id in ADMIN_ONLY_FEATURES {
        let d = evaluator.evaluate(&ctx, Some(&module(id)));
        assert!(!d.should_render, "{} should be hidden from non-admins", id);
    }
}

#[test]
fn non_admin_sees_exempt_groups() {
    let evaluator = AccessEvaluator::new();
    let ctx = non_admin_context();
    for id in [AFTER_THE_DEADLINE, POST_BY_EMAIL] {
        assert!(evaluator.evaluate(&ctx, Some(&module(id))).should_render, "{} should render", id);
    }
}

#[test]
fn scenario_admin_protect_group() {
    let ctx = SettingsContext {
        user_can_manage_modules: true,
        is_dev_mode: false,
        is_linked: true,
        ..Default::default()
    };
    let d = AccessEvaluator::new().evaluate(&ctx, Some(&protect_module()));
    assert_eq!(
        d,
        VisibilityDecision {
            should_render: true,
            show_learn_more: true,
            learn_more_url: Some(PROTECT_SUPPORT.to_string()),
            is_faded: false,
            has_child_styling: false,
        }
    );
}

#[test]
fn scenario_non_admin_widget_visibility() {
    let ctx = SettingsContext { user_can_manage_modules: false, ..Default::default() };
    let d = AccessEvaluator::new().evaluate(&ctx, Some(&FeatureDescriptor::from("widget-visibility")));
    assert!(!d.should_render);
    assert!(!d.show_learn_more);
    assert!(!d.is_faded);
}
