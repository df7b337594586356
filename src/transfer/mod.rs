//! Transfer module for FTP client
//!
//! Handles active-mode data channel negotiation and streaming upload content
//! over the data connection.

pub mod data_channel;
pub mod file_ops;
pub mod modes;
pub mod results;

// Re-export key types and functions
pub use data_channel::{DataConnection, DataListener, format_port_argument};
pub use file_ops::send_content;
pub use modes::TransferType;
pub use results::UploadResult;
