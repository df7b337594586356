//! Input validation utilities
//!
//! Command arguments are written verbatim onto the control connection, so
//! anything that could terminate or split a command line is refused.

use crate::error::FtpClientError;

/// Returns true if `input` is safe to place on a command line.
pub fn is_valid_input(input: &str) -> bool {
    input.len() <= 512 && !input.contains(['\0', '\r', '\n'])
}

/// Validates a command argument, naming it in the error.
pub fn validate_argument(name: &str, value: &str, required: bool) -> Result<(), FtpClientError> {
    if required && value.trim().is_empty() {
        return Err(FtpClientError::InvalidArgument(format!("{name} cannot be empty")));
    }
    if !is_valid_input(value) {
        return Err(FtpClientError::InvalidArgument(format!(
            "{name} contains control characters or is too long"
        )));
    }
    Ok(())
}
