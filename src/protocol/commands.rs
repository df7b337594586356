//! Module `commands`
//!
//! Defines the FTP commands this client issues on the control connection
//! and how each one is written to the wire.

use std::fmt;

use crate::transfer::TransferType;

/// Represents an FTP command sent by the client.
///
/// Commands that require arguments store them as `String` variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    USER(String),       // Username for login
    PASS(String),       // Password for login
    TYPE(TransferType), // Representation type for the next transfer
    PORT(String),       // Active mode data port specification
    STOR(String),       // Store/upload file
    QUIT,
}

impl Command {
    /// Returns the command line as sent to the server, without the CRLF terminator.
    pub fn to_wire(&self) -> String {
        match self {
            Command::USER(name) => format!("USER {name}"),
            Command::PASS(password) => format!("PASS {password}"),
            Command::TYPE(kind) => format!("TYPE {}", kind.code()),
            Command::PORT(arg) => format!("PORT {arg}"),
            Command::STOR(name) => format!("STOR {name}"),
            Command::QUIT => "QUIT".to_string(),
        }
    }
}

/// Log-safe rendering: identical to the wire form except that passwords are masked.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PASS(_) => write!(f, "PASS ****"),
            other => write!(f, "{}", other.to_wire()),
        }
    }
}
