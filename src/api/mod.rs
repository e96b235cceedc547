//! HTTP surface combining prompt evaluation, challenge grading, and operational endpoints.

mod routes;

pub use routes::{evaluate_handler, with_prompt_routes, AppState, EvaluateRequest};
