#![no_main]

// Harness: request_json
// Arbitrary documents must decode to a request or an error, never a panic.

use libfuzzer_sys::fuzz_target;
use settings_group_core::evaluate_json;

fuzz_target!(|data: &str| {
    if let Ok(decision) = evaluate_json(data) {
        assert_eq!(decision.show_learn_more, decision.learn_more_url.is_some());
    }
});
