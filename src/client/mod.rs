//! Client session management
//!
//! Handles the control connection, login handshake, and upload lifecycle.

pub mod control;
pub mod session;
pub mod state;

pub use control::ControlConnection;
pub use session::FtpClient;
pub use state::SessionState;
