//! # Engine Module
//!
//! Batch evaluation on top of the stateless models in [`crate::core`].
//!
//! - **Configuration** ([`config`]) - Constants and sampling parameters for each analysis,
//!   assembled through builders
//! - **Error Handling** ([`error`]) - [`error::EngineError`], wrapping domain, sampling and
//!   configuration failures
//! - **Tasks** ([`tasks`]) - Order-preserving evaluation of a potential over a domain sample,
//!   parallel when the `parallel` feature is enabled

pub mod config;
pub mod error;
pub mod tasks;
