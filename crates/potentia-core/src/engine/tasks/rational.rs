use super::evaluate_samples;
use crate::core::extremum::{CriticalKind, CriticalPoint};
use crate::core::rational::RationalPotential;
use crate::engine::error::EngineError;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct RationalEvaluation {
    pub series: Vec<f64>,
    pub critical_point: CriticalPoint,
}

impl RationalEvaluation {
    pub fn classification(&self) -> CriticalKind {
        self.critical_point.kind
    }
}

/// Evaluates the potential at every sample and locates its analytic critical point.
#[instrument(skip_all, name = "rational_task", fields(samples = samples.len()))]
pub fn run(
    samples: &[f64],
    potential: &RationalPotential,
) -> Result<RationalEvaluation, EngineError> {
    let critical_point = potential.critical_point()?;
    debug!(
        position = critical_point.position,
        value = critical_point.value,
        kind = %critical_point.kind,
        "Located critical point."
    );
    let series = evaluate_samples(samples, |x| potential.potential(x))?;
    Ok(RationalEvaluation {
        series,
        critical_point,
    })
}

/// Evaluates `A/x³ − B/x` over `samples` together with its critical point.
pub fn evaluate_rational(samples: &[f64], a: f64, b: f64) -> Result<RationalEvaluation, EngineError> {
    let potential = RationalPotential::new(a, b)?;
    run(samples, &potential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DomainError;
    use crate::core::sampling::linspace;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn evaluate_rational_returns_series_and_stable_minimum() {
        let evaluation = evaluate_rational(&[1.0, 3.0], 2.0, 1.0).unwrap();
        assert!(f64_approx_equal(evaluation.series[0], 1.0));
        assert!(f64_approx_equal(evaluation.series[1], 2.0 / 27.0 - 1.0 / 3.0));
        assert!(f64_approx_equal(
            evaluation.critical_point.position,
            6.0_f64.sqrt()
        ));
        assert_eq!(evaluation.classification(), CriticalKind::Minimum);
    }

    #[test]
    fn series_beyond_the_critical_point_is_strictly_increasing() {
        let samples = linspace(6.0_f64.sqrt() + 0.01, 40.0, 2000, true).unwrap();
        let evaluation = evaluate_rational(&samples, 2.0, 1.0).unwrap();
        assert!(evaluation.series.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn evaluate_rational_rejects_non_positive_samples() {
        for bad in [0.0, -2.0] {
            let result = evaluate_rational(&[1.0, bad], 2.0, 1.0);
            assert!(matches!(
                result,
                Err(EngineError::Domain {
                    source: DomainError::NonPositivePosition(_)
                })
            ));
        }
    }

    #[test]
    fn evaluate_rational_with_zero_b_fails_before_evaluating() {
        let result = evaluate_rational(&[1.0, 2.0], 2.0, 0.0);
        assert!(matches!(
            result,
            Err(EngineError::Domain {
                source: DomainError::ZeroCoefficient("B")
            })
        ));
    }
}
