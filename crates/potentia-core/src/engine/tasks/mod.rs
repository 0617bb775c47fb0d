//! Batch evaluation tasks.
//!
//! Each task maps a domain sample through one potential model. Samples are
//! independent, so with the `parallel` feature the map runs on the rayon pool;
//! output order always matches input order.

pub mod profile;
pub mod rational;

use crate::core::error::DomainError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) fn evaluate_samples<F>(samples: &[f64], potential: F) -> Result<Vec<f64>, DomainError>
where
    F: Fn(f64) -> Result<f64, DomainError> + Send + Sync,
{
    #[cfg(not(feature = "parallel"))]
    let iterator = samples.iter();

    #[cfg(feature = "parallel")]
    let iterator = samples.par_iter();

    iterator.map(|&sample| potential(sample)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_samples_preserves_input_order() {
        let samples: Vec<f64> = (0..10_000).map(|i| i as f64).collect();
        let doubled = evaluate_samples(&samples, |x| Ok(2.0 * x)).unwrap();
        assert_eq!(doubled.len(), samples.len());
        assert!(doubled.iter().zip(&samples).all(|(d, s)| *d == 2.0 * s));
    }

    #[test]
    fn evaluate_samples_surfaces_the_first_domain_error() {
        let samples = [1.0, 2.0, -3.0, 4.0];
        let result = evaluate_samples(&samples, |x| {
            if x < 0.0 {
                Err(DomainError::NegativeDistance(x))
            } else {
                Ok(x)
            }
        });
        assert_eq!(result, Err(DomainError::NegativeDistance(-3.0)));
    }

    #[test]
    fn evaluate_samples_of_empty_input_is_empty() {
        assert_eq!(evaluate_samples(&[], |x| Ok(x)).unwrap(), Vec::<f64>::new());
    }
}
