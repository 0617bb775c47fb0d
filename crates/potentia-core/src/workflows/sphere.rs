use crate::core::sampling::{SamplePoint, split_domain, zip_points};
use crate::core::sphere::UniformSphere;
use crate::engine::config::SphereConfig;
use crate::engine::error::EngineError;
use crate::engine::tasks;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SphereProfile {
    pub sphere: UniformSphere,
    pub samples: Vec<f64>,
    pub potentials: Vec<f64>,
    pub centre: SamplePoint,
    pub surface: SamplePoint,
    pub continuity_gap: f64,
}

impl SphereProfile {
    pub fn points(&self) -> Vec<SamplePoint> {
        zip_points(&self.samples, &self.potentials)
    }

    pub fn outer_radius(&self) -> f64 {
        self.samples.last().copied().unwrap_or(self.sphere.radius())
    }
}

#[instrument(skip_all, name = "sphere_workflow")]
pub fn run(config: &SphereConfig) -> Result<SphereProfile, EngineError> {
    let constants = &config.constants;
    let sphere = UniformSphere::new(
        constants.gravitational_constant,
        constants.source_mass,
        constants.test_mass,
        constants.radius,
    )?;
    let continuity_gap = tasks::profile::verify_continuity(&sphere)?;

    let radius = sphere.radius();
    let samples = split_domain(
        radius,
        config.sampling.interior_samples,
        radius * config.sampling.outer_extent,
        config.sampling.exterior_samples,
    )?;
    info!(
        samples = samples.len(),
        radius, "Sampled interior and exterior of the sphere."
    );

    let potentials = tasks::profile::run(&samples, &sphere)?;

    let centre = SamplePoint::new(0.0, sphere.centre_potential());
    let surface = SamplePoint::new(radius, sphere.surface_potential());
    info!(
        centre = centre.potential,
        surface = surface.potential,
        "Sphere profile complete."
    );

    Ok(SphereProfile {
        sphere,
        samples,
        potentials,
        centre,
        surface,
        continuity_gap,
    })
}
