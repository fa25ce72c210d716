pub mod core;


// Re-export the primary types so `crate::evaluator::*` paths stay short.
pub use self::core::{is_faded, resolve_learn_more, AccessEvaluator};
