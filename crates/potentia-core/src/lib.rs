//! # Potentia Core Library
//!
//! Closed-form evaluation and analysis of two classical potential-energy models:
//!
//! - the gravitational potential energy of a test mass inside and outside a uniform sphere,
//!   a two-branch piecewise function continuous at the surface;
//! - the rational potential `V(x) = A/x³ − B/x`, whose single positive stationary point is
//!   located analytically at `√(3A/B)` and classified from the sign of `V''`.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless models with validated constants, the
//!   closed-form kernels they evaluate, stationary-point classification and domain sampling.
//!
//! - **[`engine`]: Batch Evaluation.** Configuration builders, the error type shared by the
//!   upper layers and order-preserving batch tasks (parallel with the `parallel` feature).
//!
//! - **[`workflows`]: The Public API.** Complete analyses that produce every number a
//!   chart or report needs.
//!
//! Out-of-domain inputs (negative distances, non-positive positions, a vanishing `B` when
//! locating the critical point) are reported as [`DomainError`] and never clamped.

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::error::DomainError;
pub use crate::core::extremum::{CriticalKind, CriticalPoint};
pub use crate::engine::error::EngineError;
pub use crate::engine::tasks::profile::evaluate_profile;
pub use crate::engine::tasks::rational::{RationalEvaluation, evaluate_rational};
