//! FTP reply parsing
//!
//! Scans the control connection for the next reply line. Only lines that start
//! with three ASCII digits followed by a space count as replies; anything else
//! (banner text, and multi-line continuations using the `NNN-` form) is dropped.

use std::io::{self, BufRead, ErrorKind, Read};

use log::debug;

use crate::protocol::ServerReply;

/// Longest line accepted from the server, terminator included
pub const MAX_REPLY_LINE: usize = 8192;

/// Parses one line into a reply if it has the `NNN ` shape.
pub fn parse_reply_line(line: &str) -> Option<ServerReply> {
    let bytes = line.as_bytes();
    if bytes.len() < 4 || !bytes[..3].iter().all(u8::is_ascii_digit) || bytes[3] != b' ' {
        return None;
    }

    let code = line[..3].parse().ok()?;
    Some(ServerReply::new(code, line.to_string()))
}

/// Reads lines until a reply line is found.
///
/// Reaching end of stream before a reply is an `UnexpectedEof` error; a line
/// longer than `MAX_REPLY_LINE` is `InvalidData`.
pub fn read_reply<R: BufRead>(reader: &mut R) -> io::Result<ServerReply> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = Read::take(&mut *reader, MAX_REPLY_LINE as u64).read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "control connection closed while waiting for a reply",
            ));
        }
        if n == MAX_REPLY_LINE && !buf.ends_with(b"\n") {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("reply line exceeds {MAX_REPLY_LINE} bytes"),
            ));
        }

        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_end_matches(['\r', '\n']);
        match parse_reply_line(line) {
            Some(reply) => return Ok(reply),
            None => debug!("Skipping non-reply line: {line}"),
        }
    }
}
