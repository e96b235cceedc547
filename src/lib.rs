//! Rule-based prompt quality scoring and prompt-engineering challenge grading.
//!
//! The [`evaluation`] and [`challenges`] engines are pure and synchronous; the remaining modules
//! wire them into an HTTP service and CLI.

pub mod api;
pub mod challenges;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;
pub mod validation;
