pub mod rational;
pub mod sphere;
