//! # Workflows Module
//!
//! Complete analyses, from configuration to the numbers a renderer needs.
//!
//! - **Uniform sphere** ([`sphere`]) - Samples the interior and exterior of the sphere,
//!   verifies surface continuity, evaluates the profile and reports the centre and surface
//!   values.
//! - **Rational potential** ([`rational`]) - Samples the configured interval, evaluates the
//!   curve, locates and classifies the critical point, and evaluates marker and tabulated
//!   positions.

pub mod rational;
pub mod sphere;
