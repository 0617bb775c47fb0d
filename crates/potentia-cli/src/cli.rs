use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Potentia CLI - Evaluate, analyse and plot classical potential-energy curves.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for batch evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Gravitational potential energy inside and outside a uniform sphere.
    Sphere(AnalysisArgs),
    /// The rational potential V(x) = A/x^3 - B/x and its critical point.
    Rational(AnalysisArgs),
}

/// Arguments shared by both analyses.
#[derive(Args, Debug)]
pub struct AnalysisArgs {
    /// Path to a configuration file in TOML format overriding the built-in constants.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S sphere.radius=2.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Render the curve to an image (SVG if the extension is .svg, bitmap otherwise).
    #[arg(long, value_name = "PATH")]
    pub plot: Option<PathBuf>,

    /// Export the evaluated series as CSV.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}
