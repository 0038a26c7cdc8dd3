//! Transfer operations
//!
//! Passive mode handshake shared by downloads and uploads:
//! `PASV`, `TYPE`, then `RETR`/`STOR` written without waiting for a reply
//! (the server answers only once the data has moved), then a fresh
//! connection to the control hostname on the advertised port.

use std::io::ErrorKind;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

use crate::client::{Session, SessionState};
use crate::error::{FtpClientError, Result, ValidationError};
use crate::protocol::{Command, expect_code, extract_data_port};
use crate::transfer::data_channel::{open_data_channel, read_deadline, receive, send};
use crate::transfer::{DataEndpoint, Direction, TransferMode};
use crate::utils::validation::is_valid_argument;

impl Session {
    /// Downloads `src` into `sink`, returning the number of bytes received.
    ///
    /// A non-zero `timeout` sets a read deadline on the data connection.
    /// The data connection is closed on every exit path. Unless disabled
    /// with [`Session::set_await_completion`], the server's final status is
    /// read and must be 2xx, also when the transfer fails part way.
    pub async fn retrieve<W>(
        &mut self,
        src: &str,
        sink: &mut W,
        mode: TransferMode,
        timeout: Duration,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        info!("Starting download: {} ({})", src, mode);
        let mut data = self
            .open_transfer(Command::Retr(src.to_string()), mode, Direction::Download)
            .await?;

        let received = receive(&mut data, sink, read_deadline(timeout)).await;
        drop(data);
        let received = match received {
            Ok(n) => n,
            Err(e) => return Err(self.abort_transfer(Direction::Download, e).await),
        };

        self.finish_transfer(Direction::Download).await?;
        info!("Download completed: {} ({} bytes)", src, received);
        Ok(received)
    }

    /// Uploads everything `source` yields to `dest`, returning the number
    /// of bytes sent.
    ///
    /// The timeout is a read deadline on the data connection, and an upload
    /// never reads from it, so it has no effect here.
    pub async fn store<R>(
        &mut self,
        dest: &str,
        source: &mut R,
        mode: TransferMode,
        _timeout: Duration,
    ) -> Result<u64>
    where
        R: AsyncRead + Unpin,
    {
        info!("Starting upload: {} ({})", dest, mode);
        let mut data = self
            .open_transfer(Command::Stor(dest.to_string()), mode, Direction::Upload)
            .await?;

        let sent = send(source, &mut data).await;
        drop(data);
        let sent = match sent {
            Ok(n) => n,
            Err(e) => return Err(self.abort_transfer(Direction::Upload, e).await),
        };

        self.finish_transfer(Direction::Upload).await?;
        info!("Upload completed: {} ({} bytes)", dest, sent);
        Ok(sent)
    }

    /// Downloads `src` into memory.
    pub async fn get_buffer(
        &mut self,
        src: &str,
        mode: TransferMode,
        timeout: Duration,
    ) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.retrieve(src, &mut buffer, mode, timeout).await?;
        Ok(buffer)
    }

    async fn open_transfer(
        &mut self,
        command: Command,
        mode: TransferMode,
        direction: Direction,
    ) -> Result<TcpStream> {
        self.require_state(SessionState::Authenticated)?;
        let path = command.argument();
        if path.trim().is_empty() || !is_valid_argument(&path) {
            return Err(ValidationError::MalformedInput(format!(
                "{} needs a single-line path",
                command.verb()
            ))
            .into());
        }

        let endpoint = self.enter_passive_mode().await?;

        let reply = self.execute(&Command::Type(mode)).await?;
        expect_code(2, &reply)?;

        self.send_line(command.verb(), &path).await?;

        match open_data_channel(&endpoint).await {
            Ok(data) => Ok(data),
            Err(e) => Err(self.abort_transfer(direction, e).await),
        }
    }

    async fn enter_passive_mode(&mut self) -> Result<DataEndpoint> {
        let reply = self.execute(&Command::Pasv).await?;
        expect_code(2, &reply)?;
        let port = extract_data_port(&reply.text)?;

        let endpoint = DataEndpoint::new(self.hostname(), port);
        debug!("Passive mode data endpoint {}", endpoint);
        Ok(endpoint)
    }

    /// Reads the final reply of a transfer, skipping preliminary 1xx replies.
    async fn finish_transfer(&mut self, direction: Direction) -> Result<()> {
        if !self.await_completion() {
            return Ok(());
        }

        loop {
            let reply = self.read_reply().await?;
            if reply.is_preliminary() {
                debug!("{:?} in progress: {}", direction, reply);
                continue;
            }
            expect_code(2, &reply)?;
            return Ok(());
        }
    }

    /// Consumes the server's replies to a transfer command that failed
    /// after it was sent, so the next command reads its own reply.
    ///
    /// A non-2xx final reply replaces `cause`, except for an elapsed read
    /// deadline, which the server's abort reply only follows from.
    async fn abort_transfer(
        &mut self,
        direction: Direction,
        cause: FtpClientError,
    ) -> FtpClientError {
        if !self.await_completion() {
            return cause;
        }

        loop {
            match self.read_reply().await {
                Ok(reply) if reply.is_preliminary() => {
                    debug!("{:?} in progress: {}", direction, reply);
                }
                Ok(reply) => {
                    return match expect_code(2, &reply) {
                        Err(rejected) if cause.io_kind() != Some(ErrorKind::TimedOut) => {
                            warn!("{:?} failed ({}), server answered {}", direction, cause, reply);
                            rejected.into()
                        }
                        _ => cause,
                    };
                }
                Err(e) => {
                    warn!("Could not read the final reply after a failed {:?}: {}", direction, e);
                    return cause;
                }
            }
        }
    }
}
