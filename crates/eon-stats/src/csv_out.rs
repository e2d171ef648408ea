//! CSV output for the sampled time series.

use std::path::Path;

use crate::collector::SampleRow;
use crate::error::StatsResult;

/// Write the sampled time series to `path` as CSV with a header row.
pub fn write_samples(path: impl AsRef<Path>, rows: &[SampleRow]) -> StatsResult<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record([
        "time",
        "utilization",
        "active_connections",
        "capacity_served",
        "mean_fragments",
    ])?;
    for r in rows {
        w.write_record(&[
            r.time.to_string(),
            r.utilization.to_string(),
            r.active_connections.to_string(),
            r.capacity_served.to_string(),
            r.mean_fragments.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
