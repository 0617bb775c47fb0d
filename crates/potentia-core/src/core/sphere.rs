use super::error::DomainError;
use super::potentials;

/// Which closed-form branch of the profile applies at a given distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Interior,
    Exterior,
}

/// Gravitational potential energy of a test mass `m` at distance `r` from the
/// centre of a uniform sphere of mass `M` and radius `R`.
///
/// ```text
/// V(r) = -G·M·m / (2·R³) · (3·R² − r²)    0 ≤ r < R
/// V(r) = -G·M·m / r                        r ≥ R
/// ```
///
/// The profile is continuous at `r = R` and non-decreasing in `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSphere {
    gravitational_constant: f64,
    source_mass: f64,
    test_mass: f64,
    radius: f64,
}

impl UniformSphere {
    pub fn new(
        gravitational_constant: f64,
        source_mass: f64,
        test_mass: f64,
        radius: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            gravitational_constant: DomainError::check_constant("G", gravitational_constant)?,
            source_mass: DomainError::check_constant("M", source_mass)?,
            test_mass: DomainError::check_constant("m", test_mass)?,
            radius: DomainError::check_constant("R", radius)?,
        })
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    pub fn source_mass(&self) -> f64 {
        self.source_mass
    }

    pub fn test_mass(&self) -> f64 {
        self.test_mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `G·M·m`, the coupling shared by both branches.
    #[inline]
    pub fn strength(&self) -> f64 {
        self.gravitational_constant * self.source_mass * self.test_mass
    }

    pub fn region(&self, r: f64) -> Result<Region, DomainError> {
        if r.is_nan() {
            return Err(DomainError::NotANumber);
        }
        if r < 0.0 {
            return Err(DomainError::NegativeDistance(r));
        }
        Ok(if r < self.radius {
            Region::Interior
        } else {
            Region::Exterior
        })
    }

    pub fn potential(&self, r: f64) -> Result<f64, DomainError> {
        let strength = self.strength();
        Ok(match self.region(r)? {
            Region::Interior => potentials::sphere_interior(r, strength, self.radius),
            Region::Exterior => potentials::point_mass(r, strength),
        })
    }

    /// `V(0) = -3·G·M·m / (2·R)`.
    pub fn centre_potential(&self) -> f64 {
        -3.0 * self.strength() / (2.0 * self.radius)
    }

    /// `V(R) = -G·M·m / R`.
    pub fn surface_potential(&self) -> f64 {
        -self.strength() / self.radius
    }

    /// Relative disagreement between the interior and exterior expressions at `r = R`.
    pub fn continuity_gap(&self) -> f64 {
        let strength = self.strength();
        let interior = potentials::sphere_interior(self.radius, strength, self.radius);
        let exterior = potentials::point_mass(self.radius, strength);
        if interior == exterior {
            return 0.0;
        }
        ((interior - exterior) / exterior).abs()
    }
}
