use crate::cli::AnalysisArgs;
use crate::config::ConfigResolver;
use crate::error::Result;
use crate::{export, render, report};
use potentia::workflows;
use tracing::info;

pub fn run(args: AnalysisArgs) -> Result<()> {
    let resolver = ConfigResolver::from_args(&args)?;
    let config = resolver.sphere_config()?;

    info!("Invoking the sphere profile workflow...");
    let profile = workflows::sphere::run(&config)?;
    info!(
        "Workflow finished with {} samples (continuity gap {:e}).",
        profile.samples.len(),
        profile.continuity_gap
    );

    print!("{}", report::SphereReport(&profile));

    if let Some(path) = &args.csv {
        export::write_series(&profile.points(), path)?;
        println!("✓ Profile samples written to: {}", path.display());
    }

    if let Some(path) = &args.plot {
        render::render_sphere(&profile, path)?;
        println!("✓ Profile plot written to: {}", path.display());
    }

    Ok(())
}
