#![no_main]

// Harness: evaluate_invariants
// Focus: capability gate + fade rules over arbitrary flag combinations.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use settings_group_core::{
    catalog::{EXEMPT_FEATURES, POST_BY_EMAIL},
    evaluate, DevModeProbe, FeatureDescriptor, ModuleDescriptor, SettingsContext,
};

#[derive(Arbitrary, Debug, Clone)]
struct GroupFrame {
    user_can_manage_modules: bool,
    is_dev_mode: bool,
    is_linked: bool,
    disable_in_dev_mode: bool,
    unavailable: Option<bool>,
    has_child: bool,
    support: Option<String>,
    structured: bool,
    feature_id: Option<String>,
    learn_more_button: Option<String>,
}

fuzz_target!(|frame: GroupFrame| {
    let ctx = SettingsContext {
        user_can_manage_modules: frame.user_can_manage_modules,
        is_dev_mode: frame.is_dev_mode,
        is_linked: frame.is_linked,
        disable_in_dev_mode: frame.disable_in_dev_mode,
        is_unavailable_in_dev_mode: frame.unavailable.map(DevModeProbe::constant),
        support: frame.support,
        has_child: frame.has_child,
        ..Default::default()
    };
    let descriptor = if frame.structured {
        Some(FeatureDescriptor::Module(ModuleDescriptor {
            module: frame.feature_id,
            learn_more_button: frame.learn_more_button,
        }))
    } else {
        frame.feature_id.map(FeatureDescriptor::Id)
    };

    let decision = evaluate(&ctx, descriptor.as_ref());
    let id = descriptor.as_ref().and_then(FeatureDescriptor::feature_id);

    let hidden = matches!(id, Some(id) if !ctx.user_can_manage_modules && !EXEMPT_FEATURES.contains(id));
    assert_eq!(decision.should_render, !hidden);
    assert_eq!(decision.has_child_styling, ctx.has_child);
    if hidden {
        assert!(!decision.is_faded && !decision.show_learn_more);
    } else if id == Some(POST_BY_EMAIL) && !ctx.is_linked {
        assert!(decision.is_faded);
    }
});
