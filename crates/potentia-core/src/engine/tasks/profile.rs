use super::evaluate_samples;
use crate::core::sphere::UniformSphere;
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

/// Largest relative disagreement tolerated between the two branches at `r = R`.
pub const CONTINUITY_TOLERANCE: f64 = 1e-12;

/// Refuses a sphere whose interior and exterior expressions do not meet at the surface.
pub fn verify_continuity(sphere: &UniformSphere) -> Result<f64, EngineError> {
    let gap = sphere.continuity_gap();
    debug!(gap, "Surface continuity check.");
    accept_gap(gap)
}

/// A NaN gap is a failed comparison, not a pass.
fn accept_gap(gap: f64) -> Result<f64, EngineError> {
    if !(gap <= CONTINUITY_TOLERANCE) {
        return Err(EngineError::Discontinuity {
            gap,
            tolerance: CONTINUITY_TOLERANCE,
        });
    }
    Ok(gap)
}

/// Evaluates the uniform-sphere profile at every sample, in order.
#[instrument(skip_all, name = "profile_task", fields(samples = samples.len()))]
pub fn run(samples: &[f64], sphere: &UniformSphere) -> Result<Vec<f64>, EngineError> {
    verify_continuity(sphere)?;
    Ok(evaluate_samples(samples, |r| sphere.potential(r))?)
}

/// Evaluates `V(r)` for a uniform sphere with constants `G, M, m, R` over `samples`.
pub fn evaluate_profile(
    samples: &[f64],
    gravitational_constant: f64,
    source_mass: f64,
    test_mass: f64,
    radius: f64,
) -> Result<Vec<f64>, EngineError> {
    let sphere = UniformSphere::new(gravitational_constant, source_mass, test_mass, radius)?;
    run(samples, &sphere)
}
