//! FTP Protocol implementation
//!
//! Handles FTP command serialization, reply parsing, and reply codes.

pub mod commands;
pub mod parser;
pub mod responses;

pub use commands::Command;
pub use parser::{parse_reply_line, read_reply};
pub use responses::ServerReply;
