pub struct DefaultsConfig {
    pub gravitational_constant: f64,
    pub source_mass: f64,
    pub test_mass: f64,
    pub radius: f64,
    pub interior_samples: usize,
    pub exterior_samples: usize,
    pub outer_extent: f64,
    pub a: f64,
    pub b: f64,
    pub start: f64,
    pub end: f64,
    pub samples: usize,
    pub markers: Vec<f64>,
    pub annotated: Vec<f64>,
    pub tabulated: Vec<f64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 1.0,
            source_mass: 1.0,
            test_mass: 1.0,
            radius: 1.0,
            interior_samples: 500,
            exterior_samples: 1000,
            outer_extent: 10.0,
            a: 2.0,
            b: 1.0,
            start: 1.0,
            end: 15.0,
            samples: 5000,
            markers: vec![1.0, 2.0, 3.0, 5.0, 8.0, 12.0],
            annotated: vec![1.0, 3.0],
            tabulated: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
        }
    }
}
