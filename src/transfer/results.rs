//! Transfer result types
//!
//! Defines result structures returned by transfer operations.

use std::net::SocketAddr;

/// Result of a completed upload (STOR command)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub remote_name: String,
    pub bytes_sent: u64,
    pub data_peer: SocketAddr,
}
