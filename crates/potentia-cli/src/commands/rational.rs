use crate::cli::AnalysisArgs;
use crate::config::ConfigResolver;
use crate::error::Result;
use crate::{export, render, report};
use potentia::workflows;
use tracing::{info, warn};

pub fn run(args: AnalysisArgs) -> Result<()> {
    let resolver = ConfigResolver::from_args(&args)?;
    let app_config = resolver.rational_config()?;

    info!("Invoking the rational potential workflow...");
    let analysis = workflows::rational::run(&app_config.core_config)?;
    info!(
        "Workflow finished: {} at x = {:.4}.",
        analysis.critical_point.kind, analysis.critical_point.position
    );

    if !analysis.critical_point_in_range() {
        warn!("The critical point lies outside the sampled interval and will not be drawn.");
    }

    print!("{}", report::RationalReport(&analysis));

    if let Some(path) = &args.csv {
        export::write_series(&analysis.points(), path)?;
        println!("✓ Curve samples written to: {}", path.display());
    }

    if let Some(path) = &args.plot {
        render::render_rational(&analysis, &app_config.annotated, path)?;
        println!("✓ Curve plot written to: {}", path.display());
    }

    Ok(())
}
