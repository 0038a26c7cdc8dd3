//! Control session
//!
//! Owns the command connection to the server. Every call writes one command
//! and waits for its complete reply; the `&mut self` receivers keep a single
//! command in flight at a time.

use log::{debug, info, warn};
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::client::SessionState;
use crate::error::{ConnectionError, FtpClientError, Result, ValidationError};
use crate::protocol::responses::CLOSING;
use crate::protocol::{Command, Response, classify, expect_code, format_command, read_response};
use crate::utils::network::hostname;
use crate::utils::validation::{is_valid_argument, validate_credentials, validate_host};

/// An FTP control session.
///
/// Created by [`Session::dial`], which only returns once the server's
/// welcome reply was accepted. The hostname is kept to redial data
/// connections.
pub struct Session {
    control: Option<BufReader<TcpStream>>,
    hostname: String,
    state: SessionState,
    welcome: Response,
    await_completion: bool,
}

impl Session {
    /// Dials up a remote FTP server.
    ///
    /// `host` must carry an explicit numeric port, e.g. `myserver:21` or
    /// `[::1]:2121`.
    ///
    /// # Errors
    ///
    /// * `Validation` for a blank host or a missing or non-numeric port, before any I/O.
    /// * `Connection` if the dial fails or the welcome reply is not 2xx.
    ///
    /// # Example
    /// ```no_run
    /// use rax_ftp_client::Session;
    ///
    /// # async fn run() -> rax_ftp_client::Result<()> {
    /// let mut session = Session::dial("127.0.0.1:21").await?;
    /// session.login("user", "password").await?;
    /// session.logout().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn dial(host: &str) -> Result<Self> {
        validate_host(host)?;

        let stream = TcpStream::connect(host)
            .await
            .map_err(|e| ConnectionError::DialFailed(host.to_string(), e))?;
        let mut control = BufReader::new(stream);

        let welcome = match read_response(&mut control).await {
            Ok(response) => response,
            Err(FtpClientError::Io(e)) => return Err(ConnectionError::WelcomeUnreadable(e).into()),
            Err(FtpClientError::Protocol(e)) => {
                return Err(ConnectionError::WelcomeRejected(e).into());
            }
            Err(e) => return Err(e),
        };
        expect_code(2, &welcome).map_err(ConnectionError::WelcomeRejected)?;

        info!("Connected to {} ({})", host, welcome);

        Ok(Self {
            control: Some(control),
            hostname: hostname(host).to_string(),
            state: SessionState::Connected,
            welcome,
            await_completion: true,
        })
    }

    /// Sends `VERB ARGUMENT` and returns the complete reply.
    ///
    /// The reply code is not classified here.
    ///
    /// # Errors
    ///
    /// * `Validation` if the session is closed or the argument contains CR, LF or NUL.
    /// * `Io` on write/read failure, including the channel closing mid-reply.
    /// * `Protocol` if the status code is not numeric.
    pub async fn command(&mut self, verb: &str, argument: &str) -> Result<Response> {
        self.send_line(verb, argument).await?;
        self.read_reply().await
    }

    /// Sends a typed [`Command`] and returns its reply.
    pub async fn execute(&mut self, command: &Command) -> Result<Response> {
        self.command(command.verb(), &command.argument()).await
    }

    /// Log into the server with `USER` then `PASS`.
    ///
    /// Blank credentials are rejected before anything is sent. Reply codes
    /// are not turned into errors: the `PASS` reply is returned and the
    /// session only becomes `Authenticated` when the server answered 2xx.
    /// A rejected login leaves the channel open for `logout`.
    pub async fn login(&mut self, user: &str, password: &str) -> Result<Response> {
        validate_credentials(user, password)?;
        self.require_open()?;

        let user_reply = self.execute(&Command::User(user.to_string())).await?;
        let pass_reply = self.execute(&Command::Pass(password.to_string())).await?;

        if classify(2, user_reply.code).is_ok() || classify(2, pass_reply.code).is_ok() {
            self.state = SessionState::Authenticated;
            info!("Logged in to {} as {}", self.hostname, user);
        } else {
            warn!("Login as {} rejected: {}", user, pass_reply);
        }

        Ok(pass_reply)
    }

    /// Sends `QUIT` and closes the control channel.
    ///
    /// The channel is closed and the session marked `Disconnected` whatever
    /// the server answered; a failing `QUIT` exchange or close is still
    /// returned to the caller.
    pub async fn logout(&mut self) -> Result<()> {
        let quit = self.execute(&Command::Quit).await;

        let closed = match self.control.take() {
            Some(mut control) => control.get_mut().shutdown().await,
            None => Ok(()),
        };
        self.state = SessionState::Disconnected;
        info!("Control channel to {} closed", self.hostname);

        let quit = quit?;
        if quit.code != CLOSING {
            warn!("Server answered QUIT with {}", quit);
        }
        closed?;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Hostname used for data connections
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The server's welcome reply
    pub fn welcome(&self) -> &Response {
        &self.welcome
    }

    pub fn await_completion(&self) -> bool {
        self.await_completion
    }

    /// Whether transfers read back the server's final status reply.
    ///
    /// Enabled by default. When disabled the completion reply stays unread
    /// on the control channel.
    pub fn set_await_completion(&mut self, await_completion: bool) {
        self.await_completion = await_completion;
    }

    /// Writes one command line without waiting for a reply.
    pub(crate) async fn send_line(&mut self, verb: &str, argument: &str) -> Result<()> {
        if !is_valid_argument(argument) {
            return Err(ValidationError::MalformedInput(format!(
                "{} argument contains a line break or NUL",
                verb
            ))
            .into());
        }
        let control = self.control_mut()?;

        if verb.eq_ignore_ascii_case("PASS") {
            debug!("--> PASS ****");
        } else {
            debug!("--> {} {}", verb, argument);
        }

        let line = format_command(verb, argument);
        control.get_mut().write_all(line.as_bytes()).await?;
        control.get_mut().flush().await?;
        Ok(())
    }

    /// Reads the next complete reply from the control channel.
    pub(crate) async fn read_reply(&mut self) -> Result<Response> {
        let control = self.control_mut()?;
        read_response(control).await
    }

    pub(crate) fn require_state(&self, expected: SessionState) -> Result<()> {
        if self.state != expected {
            return Err(ValidationError::InvalidState {
                expected,
                actual: self.state,
            }
            .into());
        }
        Ok(())
    }

    fn require_open(&self) -> Result<()> {
        if self.control.is_none() {
            return Err(ValidationError::InvalidState {
                expected: SessionState::Connected,
                actual: self.state,
            }
            .into());
        }
        Ok(())
    }

    fn control_mut(&mut self) -> Result<&mut BufReader<TcpStream>> {
        let actual = self.state;
        self.control.as_mut().ok_or_else(|| {
            ValidationError::InvalidState {
                expected: SessionState::Connected,
                actual,
            }
            .into()
        })
    }
}
