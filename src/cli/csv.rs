use noscope::{MatchResult, Result};
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Match Results to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(results: &[MatchResult], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.serialize(["Domain", "IP"])?;

    // Write match records
    for result in results {
        writer.serialize((&result.name, result.address_text()))?;
    }

    writer.flush()?;

    Ok(())
}
