//! Error types
//!
//! Defines the error taxonomy returned by every client operation.

use std::fmt;
use std::io;
use std::net::IpAddr;

use crate::protocol::ServerReply;

/// Errors raised by `FtpClient` operations
#[derive(Debug)]
pub enum FtpClientError {
    /// The server answered with a reply code other than the one the command requires.
    Protocol { expected: u16, reply: ServerReply },
    /// Socket or stream failure, passed through from the networking layer.
    Transport(io::Error),
    /// The control connection's local address cannot be expressed in a PORT command.
    UnsupportedAddress(IpAddr),
    InvalidArgument(String),
    NotConnected,
    AlreadyConnected,
}

impl FtpClientError {
    /// Returns the offending reply for protocol errors.
    pub fn reply(&self) -> Option<&ServerReply> {
        match self {
            FtpClientError::Protocol { reply, .. } => Some(reply),
            _ => None,
        }
    }
}

impl fmt::Display for FtpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpClientError::Protocol { expected, reply } => {
                write!(f, "Protocol error: expected {}, got: {}", expected, reply)
            }
            FtpClientError::Transport(e) => write!(f, "Transport error: {}", e),
            FtpClientError::UnsupportedAddress(ip) => {
                write!(f, "Unsupported local address for PORT: {}", ip)
            }
            FtpClientError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            FtpClientError::NotConnected => write!(f, "Not connected"),
            FtpClientError::AlreadyConnected => write!(f, "Already connected"),
        }
    }
}

impl std::error::Error for FtpClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FtpClientError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FtpClientError {
    fn from(error: io::Error) -> Self {
        FtpClientError::Transport(error)
    }
}
