use crate::core::errors::{file_error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Utilities
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Read Line-Oriented Input Files
--------------------------------------------------------------------------------------*/

/// Read a plain-text file and return its entries, one per line. Entries are trimmed of
/// surrounding whitespace and blank lines are skipped.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(file_error("Unable to read", path))
        .map(|text| parse_lines(&text))
        .inspect(|entries| debug!("Read {} entries from {:?}", entries.len(), path))
}

/// Split text into trimmed, non-blank lines.
pub(crate) fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
