use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereConstants {
    pub gravitational_constant: f64,
    pub source_mass: f64,
    pub test_mass: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellSampling {
    pub interior_samples: usize,
    pub exterior_samples: usize,
    /// Outer edge of the exterior sample, in multiples of the radius.
    pub outer_extent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SphereConfig {
    pub constants: SphereConstants,
    pub sampling: ShellSampling,
}

#[derive(Default)]
pub struct SphereConfigBuilder {
    gravitational_constant: Option<f64>,
    source_mass: Option<f64>,
    test_mass: Option<f64>,
    radius: Option<f64>,
    interior_samples: Option<usize>,
    exterior_samples: Option<usize>,
    outer_extent: Option<f64>,
}

impl SphereConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = Some(g);
        self
    }
    pub fn source_mass(mut self, mass: f64) -> Self {
        self.source_mass = Some(mass);
        self
    }
    pub fn test_mass(mut self, mass: f64) -> Self {
        self.test_mass = Some(mass);
        self
    }
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn interior_samples(mut self, n: usize) -> Self {
        self.interior_samples = Some(n);
        self
    }
    pub fn exterior_samples(mut self, n: usize) -> Self {
        self.exterior_samples = Some(n);
        self
    }
    pub fn outer_extent(mut self, multiple_of_radius: f64) -> Self {
        self.outer_extent = Some(multiple_of_radius);
        self
    }

    pub fn build(self) -> Result<SphereConfig, ConfigError> {
        let constants = SphereConstants {
            gravitational_constant: self
                .gravitational_constant
                .ok_or(ConfigError::MissingParameter("gravitational_constant"))?,
            source_mass: self
                .source_mass
                .ok_or(ConfigError::MissingParameter("source_mass"))?,
            test_mass: self
                .test_mass
                .ok_or(ConfigError::MissingParameter("test_mass"))?,
            radius: self.radius.ok_or(ConfigError::MissingParameter("radius"))?,
        };
        let sampling = ShellSampling {
            interior_samples: self
                .interior_samples
                .ok_or(ConfigError::MissingParameter("interior_samples"))?,
            exterior_samples: self
                .exterior_samples
                .ok_or(ConfigError::MissingParameter("exterior_samples"))?,
            outer_extent: self
                .outer_extent
                .ok_or(ConfigError::MissingParameter("outer_extent"))?,
        };
        Ok(SphereConfig {
            constants,
            sampling,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalCoefficients {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalSampling {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RationalConfig {
    pub coefficients: RationalCoefficients,
    pub sampling: IntervalSampling,
    /// Positions highlighted on the curve; those outside the sampled interval are skipped.
    pub markers: Vec<f64>,
    /// Positions whose values are listed in the report.
    pub tabulated: Vec<f64>,
}

#[derive(Default)]
pub struct RationalConfigBuilder {
    a: Option<f64>,
    b: Option<f64>,
    start: Option<f64>,
    end: Option<f64>,
    samples: Option<usize>,
    markers: Option<Vec<f64>>,
    tabulated: Option<Vec<f64>>,
}

impl RationalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }
    pub fn b(mut self, b: f64) -> Self {
        self.b = Some(b);
        self
    }
    pub fn start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }
    pub fn end(mut self, end: f64) -> Self {
        self.end = Some(end);
        self
    }
    pub fn samples(mut self, n: usize) -> Self {
        self.samples = Some(n);
        self
    }
    pub fn markers(mut self, positions: Vec<f64>) -> Self {
        self.markers = Some(positions);
        self
    }
    pub fn tabulated(mut self, positions: Vec<f64>) -> Self {
        self.tabulated = Some(positions);
        self
    }

    pub fn build(self) -> Result<RationalConfig, ConfigError> {
        let coefficients = RationalCoefficients {
            a: self.a.ok_or(ConfigError::MissingParameter("a"))?,
            b: self.b.ok_or(ConfigError::MissingParameter("b"))?,
        };
        let sampling = IntervalSampling {
            start: self.start.ok_or(ConfigError::MissingParameter("start"))?,
            end: self.end.ok_or(ConfigError::MissingParameter("end"))?,
            samples: self.samples.ok_or(ConfigError::MissingParameter("samples"))?,
        };
        Ok(RationalConfig {
            coefficients,
            sampling,
            markers: self.markers.unwrap_or_default(),
            tabulated: self.tabulated.unwrap_or_default(),
        })
    }
}
