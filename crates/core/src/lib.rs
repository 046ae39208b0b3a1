//! formlogic-core: form definition model and JSON parsing.
//!
//! Provides the typed form model (fields, visibility rules, answer
//! sets) shared by the evaluator and the static analyzer, plus the
//! dependency graph derived from field visibility rules.
//!
//! Definitions arrive as JSON produced by the form builder. The parser
//! is strict about field structure but deliberately lenient about
//! degenerate visibility rules, which the builder is known to persist
//! (see [`deserialize::parse_condition`]).

pub mod answers;
pub mod condition;
pub mod dependencies;
pub mod deserialize;
pub mod error;
pub mod field;
pub mod form;

// ── Convenience re-exports ───────────────────────────────────────────

pub use answers::{AnswerSet, AnswerValue};
pub use condition::{Condition, ConditionValue};
pub use dependencies::{build_dependencies, DependencyGraph};
pub use deserialize::{fields_from_json, form_from_json};
pub use error::FormError;
pub use field::{Field, FieldType, RenderAs};
pub use form::Form;
