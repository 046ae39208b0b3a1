//! formlogic-eval: the runtime half of the branching-logic engine.
//!
//! Evaluates visibility rules against live answers, resolves the
//! visible subset of a form, validates submissions against that
//! subset, and generates the public render schema.
//!
//! There is exactly one rule evaluator, shared by the authoring
//! checks, the render path, and the submission validator, so the
//! three can never disagree on which fields are visible.
//!
//! Everything here is a pure, synchronous function over borrowed
//! inputs; callers own timeout policy and persistence.

pub mod coerce;
pub mod condition;
pub mod schema;
pub mod submission;
pub mod visibility;

pub use condition::evaluate_condition;
pub use schema::{render_schema, RenderSchema, SchemaField};
pub use submission::{validate_submission, validate_submission_json, SubmissionReport};
pub use visibility::visible_fields;
