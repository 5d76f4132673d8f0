//! Error types for the Nebula render-pass library
//!
//! This module defines the error types used throughout the library,
//! covering layout validation, capability probing, and backend failures.

use std::fmt;

/// Result type for Nebula render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula render errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan call rejected the request)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid render-target layout (bad references, unsupported hint combination)
    InvalidLayout(String),

    /// Initialization failed (capability probe, extension enumeration)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidLayout(msg) => write!(f, "Invalid layout: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
