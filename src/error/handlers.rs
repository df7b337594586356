//! Error handlers
//!
//! Reports client errors and maps them to process exit codes.

use crate::error::types::FtpClientError;
use log::error;

/// Log an FTP client error
pub fn handle_error(err: &FtpClientError) {
    error!("FTP Client Error: {}", err);
}

/// Convert error to a process exit code
pub fn exit_code(err: &FtpClientError) -> i32 {
    match err {
        FtpClientError::Protocol { .. } => 3,
        FtpClientError::Transport(_) => 4,
        FtpClientError::UnsupportedAddress(_) => 5,
        FtpClientError::InvalidArgument(_) => 2,
        FtpClientError::NotConnected | FtpClientError::AlreadyConnected => 6,
    }
}
