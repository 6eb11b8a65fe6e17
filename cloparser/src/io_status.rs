//! Checked I/O results

use tracing::{error, warn};

use crate::errors::{CloError, CloResult};

/// Check the result of an I/O operation
///
/// Failures are always logged together with `context`. A `hard` failure is
/// returned as [`CloError::Io`]; a soft one is swallowed and reported as
/// `Ok(None)`.
///
/// # Errors
///
/// Returns [`CloError::Io`] if `result` is an error and `hard` is set.
///
/// # Examples
///
/// ```
/// use cloparser::check_io_status;
///
/// let missing = std::fs::read_to_string("/definitely/not/here");
/// assert_eq!(check_io_status(missing, "reading options file", false)?, None);
/// # Ok::<(), cloparser::CloError>(())
/// ```
pub fn check_io_status<T>(
    result: std::io::Result<T>,
    context: &str,
    hard: bool,
) -> CloResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(source) if hard => {
            error!(context, %source, "I/O operation failed");
            Err(CloError::Io {
                context: context.to_string(),
                source,
            })
        }
        Err(source) => {
            warn!(context, %source, "I/O operation failed, continuing");
            Ok(None)
        }
    }
}
