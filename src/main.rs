//! RAX FTP Client - Entry Point
//!
//! Uploads a local text file to an FTP server in active mode.

use clap::Parser;
use log::{error, info};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use rax_ftp_client::error::handlers::{exit_code, handle_error};
use rax_ftp_client::utils::logging::setup_logging;
use rax_ftp_client::{ClientConfig, FtpClient, FtpClientError};

#[derive(Debug, Parser)]
#[command(name = "rax-ftp-client", version, about = "Upload a file to an FTP server")]
struct Cli {
    /// Local file to upload
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Name to store the file under on the server (defaults to the local file name)
    #[arg(short = 'r', long = "remote-name", value_name = "NAME")]
    remote_name: Option<String>,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(short = 'H', long = "host", value_name = "HOST")]
    host: Option<String>,

    #[arg(short = 'p', long = "port", value_name = "PORT")]
    port: Option<u16>,

    #[arg(short = 'u', long = "user", value_name = "USER")]
    user: Option<String>,
}

fn main() {
    setup_logging();

    let cli = Cli::parse();

    let mut config = match ClientConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if let Some(port) = cli.port {
        config.control_port = port;
    }
    if let Some(user) = cli.user {
        config.username = user;
    }

    let remote_name = match cli.remote_name.or_else(|| {
        cli.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }) {
        Some(name) => name,
        None => {
            error!("Cannot derive a remote name from {}", cli.file.display());
            process::exit(2);
        }
    };

    let file = match File::open(&cli.file) {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to open {}: {e}", cli.file.display());
            process::exit(1);
        }
    };

    info!(
        "Uploading {} to {}:{} as {remote_name}",
        cli.file.display(),
        config.server_host,
        config.control_port
    );

    if let Err(e) = run(&config, &remote_name, BufReader::new(file)) {
        handle_error(&e);
        process::exit(exit_code(&e));
    }
}

fn run(
    config: &ClientConfig,
    remote_name: &str,
    content: BufReader<File>,
) -> Result<(), FtpClientError> {
    let mut client = FtpClient::new();
    client.connect_to(config.control_socket(), &config.username, &config.password)?;

    match client.upload_file(remote_name, content) {
        Ok(result) => {
            info!("Transfer complete: {} bytes", result.bytes_sent);
            client.disconnect()
        }
        Err(e) => {
            if let Err(quit_err) = client.disconnect() {
                error!("Disconnect after failed upload also failed: {quit_err}");
            }
            Err(e)
        }
    }
}
