use std::fmt::Display;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

// Error type alias used throughout the crate.
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Error Constructors
--------------------------------------------------------------------------------------*/

/// Wrap an error reading or parsing an input file with a description and the file path.
pub(crate) fn file_error<'a, E: Display>(
    context: &'a str,
    path: &'a Path,
) -> impl FnOnce(E) -> Error + 'a {
    move |error| Error::from(format!("{} {:?}: {}", context, path, error))
}

/// A scope line that is not a valid CIDR range; `line_number` is 1-based.
pub(crate) fn invalid_range<R: Display>(line_number: usize, line: &str, reason: R) -> Error {
    Error::from(format!(
        "line {}: invalid CIDR range {:?}: {}",
        line_number, line, reason
    ))
}

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
