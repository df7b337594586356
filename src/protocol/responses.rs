//! FTP Response handling
//!
//! Defines the reply codes the client expects and the parsed reply value.

use std::fmt;

/// Standard FTP reply codes
pub const FILE_STATUS_OK: u16 = 150;
pub const OK: u16 = 200;
pub const READY: u16 = 220;
pub const CLOSING: u16 = 221;
pub const TRANSFER_COMPLETE: u16 = 226;
pub const LOGIN_SUCCESS: u16 = 230;
pub const PASSWORD_REQUIRED: u16 = 331;

/// A single reply line read off the control connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReply {
    code: u16,
    line: String,
}

impl ServerReply {
    pub(crate) fn new(code: u16, line: String) -> Self {
        Self { code, line }
    }

    /// The 3-digit status code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The raw reply line, without its line terminator.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The free-form text following the code and its separating space.
    pub fn text(&self) -> &str {
        self.line.get(4..).unwrap_or("")
    }
}

impl fmt::Display for ServerReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
