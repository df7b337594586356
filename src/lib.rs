pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod transfer;
pub mod utils;

pub use client::{FtpClient, SessionState};
pub use config::ClientConfig;
pub use error::FtpClientError;
pub use protocol::ServerReply;
pub use transfer::UploadResult;
