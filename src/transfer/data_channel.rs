//! Module `data_channel`
//!
//! Active-mode data channel: the client listens on an ephemeral port, tells
//! the server where via PORT, and accepts exactly one inbound connection per
//! upload. Both the listener and the accepted stream are closed when dropped,
//! so every exit path releases them.

use log::{debug, info};
use std::io::{self, Read};
use std::net::{IpAddr, Ipv4Addr, Shutdown, SocketAddr, TcpListener, TcpStream};

use crate::error::FtpClientError;
use crate::transfer::file_ops::send_content;

/// Builds the PORT argument `h1,h2,h3,h4,p1,p2` for an IPv4 address and port.
pub fn format_port_argument(ip: Ipv4Addr, port: u16) -> String {
    let [h1, h2, h3, h4] = ip.octets();
    let [p1, p2] = port.to_be_bytes();
    format!("{h1},{h2},{h3},{h4},{p1},{p2}")
}

/// Reduces an address to IPv4, unwrapping IPv4-mapped IPv6 addresses.
fn to_ipv4(ip: IpAddr) -> Result<Ipv4Addr, FtpClientError> {
    match ip {
        IpAddr::V4(v4) => Ok(v4),
        IpAddr::V6(v6) => v6
            .to_ipv4_mapped()
            .ok_or(FtpClientError::UnsupportedAddress(ip)),
    }
}

/// Listening socket awaiting the server's data connection.
#[derive(Debug)]
pub struct DataListener {
    listener: TcpListener,
    ip: Ipv4Addr,
    port: u16,
}

impl DataListener {
    /// Binds an OS-assigned port on `local_ip`, the address the server sees for this client.
    pub fn open(local_ip: IpAddr) -> Result<Self, FtpClientError> {
        let ip = to_ipv4(local_ip)?;
        let listener = TcpListener::bind((ip, 0))?;
        let port = listener.local_addr()?.port();

        debug!("Data listener bound to {ip}:{port}");

        Ok(Self { listener, ip, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The argument to send with the PORT command for this listener.
    pub fn port_argument(&self) -> String {
        format_port_argument(self.ip, self.port)
    }

    /// Accepts one connection and closes the listener.
    pub fn accept(self) -> io::Result<DataConnection> {
        let (stream, peer) = self.listener.accept()?;
        info!("Data connection accepted from {peer}");
        Ok(DataConnection { stream, peer })
    }
}

/// An accepted data connection, alive for a single transfer.
#[derive(Debug)]
pub struct DataConnection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl DataConnection {
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Streams all of `content` to the server.
    pub fn send<R: Read>(&mut self, content: R) -> io::Result<u64> {
        send_content(content, &mut self.stream)
    }

    /// Signals end of data and closes the connection. Errors are discarded.
    pub fn close(self) {
        if let Err(e) = self.stream.shutdown(Shutdown::Both) {
            debug!("Ignoring data connection shutdown error: {e}");
        }
    }
}
