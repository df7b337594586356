//! Module `control`
//!
//! The control connection: a TCP stream to the server's command port with a
//! buffered reader for replies and a writer for commands. Every command is
//! followed by exactly one reply read before the next one goes out.

use log::debug;
use std::io::{BufReader, Write};
use std::net::{IpAddr, Shutdown, TcpStream, ToSocketAddrs};

use crate::error::FtpClientError;
use crate::protocol::{Command, ServerReply, read_reply};

#[derive(Debug)]
pub struct ControlConnection {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl ControlConnection {
    /// Opens the TCP connection. The greeting is left unread.
    pub fn open<A: ToSocketAddrs>(addr: A) -> Result<Self, FtpClientError> {
        let stream = TcpStream::connect(addr)?;
        let writer = stream.try_clone()?;
        Ok(Self {
            reader: BufReader::new(stream),
            writer,
        })
    }

    /// Local IP of the control connection, as the server sees this client.
    pub fn local_ip(&self) -> Result<IpAddr, FtpClientError> {
        Ok(self.writer.local_addr()?.ip())
    }

    /// Writes one CRLF-terminated command line.
    pub fn send(&mut self, command: &Command) -> Result<(), FtpClientError> {
        debug!("--> {command}");
        let line = format!("{}\r\n", command.to_wire());
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Reads the next reply and checks its code.
    pub fn expect(&mut self, expected: u16) -> Result<ServerReply, FtpClientError> {
        let reply = read_reply(&mut self.reader)?;
        debug!("<-- {reply}");

        if reply.code() != expected {
            return Err(FtpClientError::Protocol { expected, reply });
        }
        Ok(reply)
    }

    /// Sends a command and validates its reply.
    pub fn command(
        &mut self,
        command: Command,
        expected: u16,
    ) -> Result<ServerReply, FtpClientError> {
        self.send(&command)?;
        self.expect(expected)
    }

    /// Tears the connection down, discarding any error.
    pub fn close(self) {
        if let Err(e) = self.writer.shutdown(Shutdown::Both) {
            debug!("Ignoring control connection shutdown error: {e}");
        }
    }
}
