use crate::core::extremum::CriticalPoint;
use crate::core::rational::RationalPotential;
use crate::core::sampling::{SamplePoint, linspace, zip_points};
use crate::engine::config::RationalConfig;
use crate::engine::error::EngineError;
use crate::engine::tasks;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct RationalAnalysis {
    pub potential: RationalPotential,
    pub samples: Vec<f64>,
    pub potentials: Vec<f64>,
    pub critical_point: CriticalPoint,
    pub markers: Vec<SamplePoint>,
    pub tabulated: Vec<SamplePoint>,
}

impl RationalAnalysis {
    pub fn points(&self) -> Vec<SamplePoint> {
        zip_points(&self.samples, &self.potentials)
    }

    pub fn critical_point_in_range(&self) -> bool {
        match (self.samples.first(), self.samples.last()) {
            (Some(&start), Some(&end)) => {
                (start..=end).contains(&self.critical_point.position)
            }
            _ => false,
        }
    }
}

#[instrument(skip_all, name = "rational_workflow")]
pub fn run(config: &RationalConfig) -> Result<RationalAnalysis, EngineError> {
    let potential = RationalPotential::new(config.coefficients.a, config.coefficients.b)?;
    let interval = &config.sampling;
    let samples = linspace(interval.start, interval.end, interval.samples, true)?;
    info!(
        samples = samples.len(),
        start = interval.start,
        end = interval.end,
        "Sampled rational potential domain."
    );

    let evaluation = tasks::rational::run(&samples, &potential)?;
    let critical_point = evaluation.critical_point;

    let markers = config
        .markers
        .iter()
        .copied()
        .filter(|&x| x >= interval.start && x <= interval.end)
        .map(|x| -> Result<SamplePoint, EngineError> {
            Ok(SamplePoint::new(x, potential.potential(x)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let tabulated = config
        .tabulated
        .iter()
        .map(|&x| -> Result<SamplePoint, EngineError> {
            Ok(SamplePoint::new(x, potential.potential(x)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let analysis = RationalAnalysis {
        potential,
        samples,
        potentials: evaluation.series,
        critical_point,
        markers,
        tabulated,
    };

    if !analysis.critical_point_in_range() {
        warn!(
            position = critical_point.position,
            "Critical point lies outside the sampled interval."
        );
    }
    info!(
        position = critical_point.position,
        value = critical_point.value,
        kind = %critical_point.kind,
        "Rational potential analysis complete."
    );

    Ok(analysis)
}
