/// Written in terms of `r / R` so that neither `R³` nor `R²` is ever formed.
#[inline]
pub fn sphere_interior(r: f64, strength: f64, radius: f64) -> f64 {
    let scaled = r / radius;
    -strength / (2.0 * radius) * (3.0 - scaled * scaled)
}

#[inline]
pub fn point_mass(r: f64, strength: f64) -> f64 {
    -strength / r
}

#[inline]
pub fn inverse_cubic_minus_inverse(x: f64, a: f64, b: f64) -> f64 {
    a / x.powi(3) - b / x
}

#[inline]
pub fn inverse_cubic_minus_inverse_first_derivative(x: f64, a: f64, b: f64) -> f64 {
    -3.0 * a / x.powi(4) + b / (x * x)
}

#[inline]
pub fn inverse_cubic_minus_inverse_second_derivative(x: f64, a: f64, b: f64) -> f64 {
    12.0 * a / x.powi(5) - 2.0 * b / x.powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn sphere_interior_at_centre_is_one_and_a_half_times_surface_value() {
        let energy = sphere_interior(0.0, 2.0, 4.0);
        assert!(f64_approx_equal(energy, -1.5 * 2.0 / 4.0));
    }

    #[test]
    fn sphere_interior_matches_point_mass_at_surface() {
        let strength = 6.674e-11 * 5.972e24;
        let radius = 6.371e6;
        let inside = sphere_interior(radius, strength, radius);
        let outside = point_mass(radius, strength);
        assert!(((inside - outside) / outside).abs() < TOLERANCE);
    }

    #[test]
    fn sphere_interior_stays_finite_for_extreme_radii() {
        for radius in [1e-110, 1e103, 1e160, 1e300] {
            let centre = sphere_interior(0.0, 1.0, radius);
            let surface = sphere_interior(radius, 1.0, radius);
            assert!(centre.is_finite() && surface.is_finite());
            assert_eq!(surface, point_mass(radius, 1.0));
        }
    }

    #[test]
    fn point_mass_falls_off_as_inverse_distance() {
        assert!(f64_approx_equal(point_mass(2.0, 1.0), -0.5));
        assert!(f64_approx_equal(point_mass(4.0, 1.0), -0.25));
    }

    #[test]
    fn inverse_cubic_minus_inverse_at_unit_distance_is_difference_of_coefficients() {
        assert!(f64_approx_equal(inverse_cubic_minus_inverse(1.0, 2.0, 1.0), 1.0));
    }

    #[test]
    fn inverse_cubic_minus_inverse_at_three() {
        let energy = inverse_cubic_minus_inverse(3.0, 2.0, 1.0);
        assert!(f64_approx_equal(energy, 2.0 / 27.0 - 1.0 / 3.0));
    }

    #[test]
    fn first_derivative_vanishes_at_analytic_root() {
        let root = (3.0_f64 * 2.0 / 1.0).sqrt();
        let slope = inverse_cubic_minus_inverse_first_derivative(root, 2.0, 1.0);
        assert!(f64_approx_equal(slope, 0.0));
    }

    #[test]
    fn first_derivative_agrees_with_central_difference() {
        let h = 1e-6;
        let x = 1.7;
        let numeric = (inverse_cubic_minus_inverse(x + h, 2.0, 1.0)
            - inverse_cubic_minus_inverse(x - h, 2.0, 1.0))
            / (2.0 * h);
        let analytic = inverse_cubic_minus_inverse_first_derivative(x, 2.0, 1.0);
        assert!((numeric - analytic).abs() < 1e-6);
    }

    #[test]
    fn second_derivative_agrees_with_central_difference_of_slope() {
        let h = 1e-6;
        let x = 2.3;
        let numeric = (inverse_cubic_minus_inverse_first_derivative(x + h, 2.0, 1.0)
            - inverse_cubic_minus_inverse_first_derivative(x - h, 2.0, 1.0))
            / (2.0 * h);
        let analytic = inverse_cubic_minus_inverse_second_derivative(x, 2.0, 1.0);
        assert!((numeric - analytic).abs() < 1e-6);
    }
}
