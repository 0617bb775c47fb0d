//! # Core Module
//!
//! Stateless building blocks: closed-form potential kernels, the validated
//! physical models built on them, analytic stationary-point classification and
//! domain sampling.
//!
//! ## Overview
//!
//! Every operation in this module is a pure function of its inputs. Models
//! validate their constants on construction and reject out-of-domain
//! coordinates with a [`error::DomainError`] instead of clamping or
//! extrapolating.
//!
//! - **Kernels** ([`potentials`]) - Inline closed-form expressions
//! - **Uniform sphere** ([`sphere`]) - Piecewise gravitational potential energy
//!   inside and outside a uniform sphere
//! - **Rational potential** ([`rational`]) - `A/x³ − B/x`, its derivatives and
//!   its analytic critical point
//! - **Stationary points** ([`extremum`]) - Critical point records and their
//!   classification from curvature
//! - **Sampling** ([`sampling`]) - Uniform domain samples and evaluated points

pub mod error;
pub mod extremum;
pub(crate) mod potentials;
pub mod rational;
pub mod sampling;
pub mod sphere;
