//! Module `file_ops`
//!
//! Streams upload content from a local reader to the data connection.

use log::{debug, error};
use std::io::{self, ErrorKind, Read, Write};

const BUFFER_SIZE: usize = 8192; // 8KB buffer for better performance

/// Copies everything from `content` into `sink` unmodified, returning the byte count.
///
/// There are no retries: the first read or write failure ends the transfer.
pub fn send_content<R: Read, W: Write>(mut content: R, sink: &mut W) -> io::Result<u64> {
    let mut buffer = [0; BUFFER_SIZE];
    let mut total_bytes_sent = 0u64;

    loop {
        let n = match content.read(&mut buffer) {
            Ok(0) => break, // EOF
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                error!("Read error on upload content: {e}");
                return Err(e);
            }
        };

        if let Err(e) = sink.write_all(&buffer[..n]) {
            error!("Write failure to data stream after {total_bytes_sent} bytes: {e}");
            return Err(e);
        }

        total_bytes_sent += n as u64;
    }

    sink.flush()?;
    debug!("Sent {total_bytes_sent} bytes over data stream");

    Ok(total_bytes_sent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_bytes_verbatim() {
        let mut sink = Vec::new();
        let sent = send_content("Line 1\r\nLine 2\r\n".as_bytes(), &mut sink).unwrap();
        assert_eq!(sent, 16);
        assert_eq!(sink, b"Line 1\r\nLine 2\r\n");
    }

    #[test]
    fn empty_content_sends_nothing() {
        let mut sink = Vec::new();
        assert_eq!(send_content(io::empty(), &mut sink).unwrap(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn content_larger_than_buffer() {
        let content: Vec<u8> = (0..3 * BUFFER_SIZE + 17).map(|i| (i % 251) as u8).collect();
        let mut sink = Vec::new();
        let sent = send_content(content.as_slice(), &mut sink).unwrap();
        assert_eq!(sent, content.len() as u64);
        assert_eq!(sink, content);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_returned() {
        let err = send_content("data".as_bytes(), &mut FailingWriter).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    }
}
