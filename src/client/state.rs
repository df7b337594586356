//! Module `state`
//!
//! Session state of an `FtpClient`. It is never stored: it is derived from
//! whether the client currently owns a control connection.

/// Connection state of a client instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    /// Logged in and ready for uploads.
    Connected,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionState::Connected)
    }
}
