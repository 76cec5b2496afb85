// ============================================================================
// climbmate-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// This module provides error handling utilities for the CLI that integrate
// with the climbmate-core error types while adding CLI-specific context.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliErrorContext: Attach context to failed results

use climbmate_core::{CoreError, CoreResult};

use std::fmt;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Attaches a lazily built context message to a failed core operation,
/// e.g. the store path that could not be read or written.
pub trait CliErrorContext<T> {
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", f(), core_error))
        })
    }
}
