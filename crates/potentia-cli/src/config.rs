mod defaults;
mod file;

use crate::cli::AnalysisArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use file::FileConfig;
use potentia::engine::config as core_config;
use std::str::FromStr;
use tracing::debug;

pub struct RationalAppConfig {
    pub core_config: core_config::RationalConfig,
    /// Positions whose values are called out on the rendered chart.
    pub annotated: Vec<f64>,
}

/// Resolves the configuration for one analysis: `--set` values win over the file,
/// which wins over the built-in defaults.
pub struct ConfigResolver {
    file_config: FileConfig,
    defaults: DefaultsConfig,
}

impl ConfigResolver {
    pub fn from_args(args: &AnalysisArgs) -> Result<Self> {
        let file_config = match &args.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        let mut resolver = Self {
            file_config,
            defaults: DefaultsConfig::default(),
        };
        resolver.apply_set_values(&args.set_values)?;
        debug!("Resolved configuration layers: {:?}", resolver.file_config);
        Ok(resolver)
    }

    pub fn sphere_config(&self) -> Result<core_config::SphereConfig> {
        let file = self.file_config.sphere.clone().unwrap_or_default();
        let defaults = &self.defaults;

        core_config::SphereConfigBuilder::new()
            .gravitational_constant(
                file.gravitational_constant
                    .unwrap_or(defaults.gravitational_constant),
            )
            .source_mass(file.source_mass.unwrap_or(defaults.source_mass))
            .test_mass(file.test_mass.unwrap_or(defaults.test_mass))
            .radius(file.radius.unwrap_or(defaults.radius))
            .interior_samples(file.interior_samples.unwrap_or(defaults.interior_samples))
            .exterior_samples(file.exterior_samples.unwrap_or(defaults.exterior_samples))
            .outer_extent(file.outer_extent.unwrap_or(defaults.outer_extent))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn rational_config(&self) -> Result<RationalAppConfig> {
        let file = self.file_config.rational.clone().unwrap_or_default();
        let defaults = &self.defaults;

        let core_config = core_config::RationalConfigBuilder::new()
            .a(file.a.unwrap_or(defaults.a))
            .b(file.b.unwrap_or(defaults.b))
            .start(file.start.unwrap_or(defaults.start))
            .end(file.end.unwrap_or(defaults.end))
            .samples(file.samples.unwrap_or(defaults.samples))
            .markers(file.markers.unwrap_or_else(|| defaults.markers.clone()))
            .tabulated(file.tabulated.unwrap_or_else(|| defaults.tabulated.clone()))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(RationalAppConfig {
            core_config,
            annotated: file.annotated.unwrap_or_else(|| defaults.annotated.clone()),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "sphere.gravitational-constant" => {
                    self.sphere().gravitational_constant = Some(parse_value(key, value_str)?);
                }
                "sphere.source-mass" => {
                    self.sphere().source_mass = Some(parse_value(key, value_str)?);
                }
                "sphere.test-mass" => {
                    self.sphere().test_mass = Some(parse_value(key, value_str)?);
                }
                "sphere.radius" => {
                    self.sphere().radius = Some(parse_value(key, value_str)?);
                }
                "sphere.interior-samples" => {
                    self.sphere().interior_samples = Some(parse_value(key, value_str)?);
                }
                "sphere.exterior-samples" => {
                    self.sphere().exterior_samples = Some(parse_value(key, value_str)?);
                }
                "sphere.outer-extent" => {
                    self.sphere().outer_extent = Some(parse_value(key, value_str)?);
                }
                "rational.a" => {
                    self.rational().a = Some(parse_value(key, value_str)?);
                }
                "rational.b" => {
                    self.rational().b = Some(parse_value(key, value_str)?);
                }
                "rational.start" => {
                    self.rational().start = Some(parse_value(key, value_str)?);
                }
                "rational.end" => {
                    self.rational().end = Some(parse_value(key, value_str)?);
                }
                "rational.samples" => {
                    self.rational().samples = Some(parse_value(key, value_str)?);
                }
                "rational.markers" => {
                    self.rational().markers = Some(parse_list(key, value_str)?);
                }
                "rational.annotated" => {
                    self.rational().annotated = Some(parse_list(key, value_str)?);
                }
                "rational.tabulated" => {
                    self.rational().tabulated = Some(parse_list(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn sphere(&mut self) -> &mut file::FileSphereConfig {
        self.file_config.sphere.get_or_insert_with(Default::default)
    }

    fn rational(&mut self) -> &mut file::FileRationalConfig {
        self.file_config.rational.get_or_insert_with(Default::default)
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            std::any::type_name::<T>(),
            key,
            value_str
        ))
    })
}

fn parse_list(key: &str, value_str: &str) -> Result<Vec<f64>> {
    if value_str.trim().is_empty() {
        return Ok(Vec::new());
    }
    value_str
        .split(',')
        .map(|item| parse_value(key, item))
        .collect()
}
