use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SamplingError {
    #[error("A domain sample needs at least one point")]
    ZeroPoints,
    #[error("Invalid sampling interval [{start}, {end}]: bounds must be finite with start < end")]
    InvalidInterval { start: f64, end: f64 },
}

/// One evaluated point of a potential curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub position: f64,
    pub potential: f64,
}

impl SamplePoint {
    pub fn new(position: f64, potential: f64) -> Self {
        Self {
            position,
            potential,
        }
    }
}

/// `count` evenly spaced points over `[start, end]`, or `[start, end)` when
/// `endpoint` is false.
pub fn linspace(
    start: f64,
    end: f64,
    count: usize,
    endpoint: bool,
) -> Result<Vec<f64>, SamplingError> {
    if count == 0 {
        return Err(SamplingError::ZeroPoints);
    }
    if !(start.is_finite() && end.is_finite() && start < end) {
        return Err(SamplingError::InvalidInterval { start, end });
    }
    if count == 1 {
        return Ok(vec![start]);
    }

    let divisions = if endpoint { count - 1 } else { count };
    let step = (end - start) / divisions as f64;
    let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    if endpoint {
        points[count - 1] = end;
    }
    Ok(points)
}

/// Samples `[0, boundary)` and `[boundary, outer]` separately and concatenates
/// them, so that `boundary` itself is sampled exactly once and always from the
/// outer interval.
pub fn split_domain(
    boundary: f64,
    interior_count: usize,
    outer: f64,
    exterior_count: usize,
) -> Result<Vec<f64>, SamplingError> {
    let mut samples = linspace(0.0, boundary, interior_count, false)?;
    samples.extend(linspace(boundary, outer, exterior_count, true)?);
    Ok(samples)
}

pub fn zip_points(positions: &[f64], potentials: &[f64]) -> Vec<SamplePoint> {
    positions
        .iter()
        .zip(potentials)
        .map(|(&position, &potential)| SamplePoint::new(position, potential))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn linspace_with_endpoint_includes_both_bounds() {
        let points = linspace(1.0, 15.0, 5000, true).unwrap();
        assert_eq!(points.len(), 5000);
        assert_eq!(points[0], 1.0);
        assert_eq!(points[4999], 15.0);
    }

    #[test]
    fn linspace_without_endpoint_stops_one_step_short() {
        let points = linspace(0.0, 1.0, 4, false).unwrap();
        assert_eq!(points.len(), 4);
        assert!(f64_approx_equal(points[1], 0.25));
        assert!(f64_approx_equal(points[3], 0.75));
    }

    #[test]
    fn linspace_is_strictly_increasing() {
        let points = linspace(0.0, 10.0, 1000, true).unwrap();
        assert!(points.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn linspace_with_single_point_returns_start() {
        assert_eq!(linspace(2.0, 3.0, 1, true).unwrap(), vec![2.0]);
        assert_eq!(linspace(2.0, 3.0, 1, false).unwrap(), vec![2.0]);
    }

    #[test]
    fn linspace_rejects_zero_points() {
        assert_eq!(linspace(0.0, 1.0, 0, true), Err(SamplingError::ZeroPoints));
    }

    #[test]
    fn linspace_rejects_empty_or_reversed_intervals() {
        assert!(matches!(
            linspace(1.0, 1.0, 10, true),
            Err(SamplingError::InvalidInterval { .. })
        ));
        assert!(matches!(
            linspace(2.0, 1.0, 10, true),
            Err(SamplingError::InvalidInterval { .. })
        ));
        assert!(matches!(
            linspace(0.0, f64::INFINITY, 10, true),
            Err(SamplingError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn split_domain_samples_boundary_once_from_the_outer_interval() {
        let samples = split_domain(1.0, 500, 10.0, 1000).unwrap();
        assert_eq!(samples.len(), 1500);
        assert_eq!(samples[0], 0.0);
        assert!(samples[499] < 1.0);
        assert_eq!(samples[500], 1.0);
        assert_eq!(samples[1499], 10.0);
        assert_eq!(samples.iter().filter(|&&r| r == 1.0).count(), 1);
        assert!(samples.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn split_domain_propagates_sampling_errors() {
        assert_eq!(
            split_domain(1.0, 0, 10.0, 10),
            Err(SamplingError::ZeroPoints)
        );
        assert!(matches!(
            split_domain(1.0, 10, 0.5, 10),
            Err(SamplingError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn zip_points_pairs_positions_with_potentials() {
        let points = zip_points(&[1.0, 2.0], &[-1.0, -0.5]);
        assert_eq!(
            points,
            vec![SamplePoint::new(1.0, -1.0), SamplePoint::new(2.0, -0.5)]
        );
    }
}
