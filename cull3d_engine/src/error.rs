//! Error types for the Cull3D engine
//!
//! The culling math (camera, frustum, bounding volumes) is total and never
//! fails. These errors cover the plumbing around it: render backends,
//! scene bookkeeping, and session parameters.

use std::fmt;

/// Result type for Cull3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cull3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (program compilation, draw submission, etc.)
    BackendError(String),

    /// Invalid resource (unknown program handle, stale instance key, etc.)
    InvalidResource(String),

    /// Invalid parameter (zero-sized viewport, malformed config, etc.)
    InvalidParameter(String),

    /// Initialization failed (session, backend, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an `Error` variant and log it as ERROR (with file:line).
///
/// # Example
///
/// ```no_run
/// # use cull3d_engine::engine_err;
/// let err = engine_err!("cull3d::Session", InvalidParameter, "viewport {}x{}", 0, 0);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::cull3d::Error::$variant(message)
    }};
}

/// Log an error and return it from the enclosing function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
