//! Module `session`
//!
//! Defines `FtpClient`, an active-mode FTP client that logs in and uploads
//! text content. All I/O is blocking and strictly request/response; an
//! instance must not be shared between threads without external locking.

use log::{debug, info, warn};
use std::io::Read;
use std::net::ToSocketAddrs;

use crate::client::{ControlConnection, SessionState};
use crate::error::FtpClientError;
use crate::protocol::Command;
use crate::protocol::responses::{
    CLOSING, FILE_STATUS_OK, LOGIN_SUCCESS, OK, PASSWORD_REQUIRED, READY, TRANSFER_COMPLETE,
};
use crate::transfer::{DataListener, TransferType, UploadResult};
use crate::utils::validation::validate_argument;

/// Well-known FTP control port
pub const DEFAULT_CONTROL_PORT: u16 = 21;

/// FTP client holding at most one control connection.
#[derive(Debug, Default)]
pub struct FtpClient {
    control: Option<ControlConnection>,
}

impl FtpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.control.is_some() {
            SessionState::Connected
        } else {
            SessionState::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    /// Connects to `host` on the standard control port and logs in.
    pub fn connect(
        &mut self,
        host: &str,
        username: &str,
        password: &str,
    ) -> Result<(), FtpClientError> {
        self.connect_to((host, DEFAULT_CONTROL_PORT), username, password)
    }

    /// Connects to `addr` and logs in.
    ///
    /// Either the whole handshake succeeds and the client is `Connected`, or
    /// the control connection is closed again and the client stays
    /// `Disconnected`.
    pub fn connect_to<A: ToSocketAddrs>(
        &mut self,
        addr: A,
        username: &str,
        password: &str,
    ) -> Result<(), FtpClientError> {
        if self.control.is_some() {
            return Err(FtpClientError::AlreadyConnected);
        }
        validate_argument("username", username, true)?;
        validate_argument("password", password, false)?;

        let mut control = ControlConnection::open(addr)?;
        if let Err(e) = login(&mut control, username, password) {
            control.close();
            return Err(e);
        }

        info!("Logged in as {username}");
        self.control = Some(control);
        Ok(())
    }

    /// Sends QUIT and closes the control connection.
    ///
    /// Teardown always happens; a failed QUIT is returned afterwards. Calling
    /// this while disconnected does nothing.
    pub fn disconnect(&mut self) -> Result<(), FtpClientError> {
        let Some(mut control) = self.control.take() else {
            debug!("Disconnect requested while not connected");
            return Ok(());
        };

        let quit = control.command(Command::QUIT, CLOSING);
        control.close();

        match quit {
            Ok(_) => {
                info!("Disconnected");
                Ok(())
            }
            Err(e) => {
                warn!("QUIT failed, connection closed anyway: {e}");
                Err(e)
            }
        }
    }

    /// Uploads `content` as `remote_name` in ASCII mode over a fresh data connection.
    ///
    /// The bytes are sent unchanged. On failure the session stays connected;
    /// callers should treat the upload as incomplete and disconnect.
    pub fn upload_file<R: Read>(
        &mut self,
        remote_name: &str,
        content: R,
    ) -> Result<UploadResult, FtpClientError> {
        validate_argument("remote file name", remote_name, true)?;
        let control = self.control.as_mut().ok_or(FtpClientError::NotConnected)?;

        control.command(Command::TYPE(TransferType::Ascii), OK)?;

        let listener = DataListener::open(control.local_ip()?)?;
        control.command(Command::PORT(listener.port_argument()), OK)?;
        control.command(Command::STOR(remote_name.to_string()), FILE_STATUS_OK)?;

        let mut data = listener.accept()?;
        let data_peer = data.peer();
        let bytes_sent = data.send(content)?;
        data.close();

        control.expect(TRANSFER_COMPLETE)?;

        info!("Uploaded {remote_name} ({bytes_sent} bytes)");
        Ok(UploadResult {
            remote_name: remote_name.to_string(),
            bytes_sent,
            data_peer,
        })
    }

    /// Uploads a whole string as `remote_name`.
    pub fn upload_str(
        &mut self,
        remote_name: &str,
        content: &str,
    ) -> Result<UploadResult, FtpClientError> {
        self.upload_file(remote_name, content.as_bytes())
    }
}

fn login(
    control: &mut ControlConnection,
    username: &str,
    password: &str,
) -> Result<(), FtpClientError> {
    let greeting = control.expect(READY)?;
    debug!("Server greeting: {}", greeting.text());

    control.command(Command::USER(username.to_string()), PASSWORD_REQUIRED)?;
    control.command(Command::PASS(password.to_string()), LOGIN_SUCCESS)?;
    Ok(())
}
