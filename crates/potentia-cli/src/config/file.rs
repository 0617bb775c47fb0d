use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSphereConfig {
    #[serde(rename = "gravitational-constant")]
    pub gravitational_constant: Option<f64>,
    #[serde(rename = "source-mass")]
    pub source_mass: Option<f64>,
    #[serde(rename = "test-mass")]
    pub test_mass: Option<f64>,
    pub radius: Option<f64>,
    #[serde(rename = "interior-samples")]
    pub interior_samples: Option<usize>,
    #[serde(rename = "exterior-samples")]
    pub exterior_samples: Option<usize>,
    #[serde(rename = "outer-extent")]
    pub outer_extent: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileRationalConfig {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub samples: Option<usize>,
    pub markers: Option<Vec<f64>>,
    pub annotated: Option<Vec<f64>>,
    pub tabulated: Option<Vec<f64>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub sphere: Option<FileSphereConfig>,
    pub rational: Option<FileRationalConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
