use crate::error::Result;
use potentia::core::sampling::SamplePoint;
use std::path::Path;
use tracing::{debug, info};

/// Writes the evaluated series as `position,potential` rows.
pub fn write_series(points: &[SamplePoint], path: &Path) -> Result<()> {
    info!("Exporting {} samples to {:?}", points.len(), path);
    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    debug!("CSV export to {:?} complete.", path);
    Ok(())
}
