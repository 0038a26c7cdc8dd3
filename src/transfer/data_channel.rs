//! Module `data_channel`
//!
//! Opens the per-transfer data connection and moves bytes over it.
//! The optional deadline only bounds reads from the data connection.

use std::io::{Error, ErrorKind};
use std::time::Duration;

use log::{debug, info};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{Instant, timeout_at};

use crate::error::{ConnectionError, Result};
use crate::transfer::DataEndpoint;

const BUFFER_SIZE: usize = 8192; // 8KB buffer for better performance

/// Connects to the data endpoint negotiated for one transfer.
pub async fn open_data_channel(endpoint: &DataEndpoint) -> Result<TcpStream> {
    let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port))
        .await
        .map_err(|e| ConnectionError::DataPortUnreachable(endpoint.to_string(), e))?;
    debug!("Data connection open to {}", endpoint);
    Ok(stream)
}

/// Turns a timeout budget into an absolute read deadline; zero means none.
pub fn read_deadline(timeout: Duration) -> Option<Instant> {
    if timeout.is_zero() {
        None
    } else {
        Some(Instant::now() + timeout)
    }
}

/// Copies the data connection into `sink` until the server closes it.
pub async fn receive<R, W>(data: &mut R, sink: &mut W, deadline: Option<Instant>) -> Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut total_bytes_received = 0u64;

    loop {
        let n = read_before(data, &mut buffer, deadline).await?;
        if n == 0 {
            break; // EOF
        }
        sink.write_all(&buffer[..n]).await?;
        total_bytes_received += n as u64;
    }
    sink.flush().await?;

    info!("Received {} bytes over data channel", total_bytes_received);
    Ok(total_bytes_received)
}

/// Copies `source` into the data connection, then shuts down its write
/// side so the server sees end of file.
pub async fn send<R, W>(source: &mut R, data: &mut W) -> Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut total_bytes_sent = 0u64;

    loop {
        let n = source.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        data.write_all(&buffer[..n]).await?;
        total_bytes_sent += n as u64;
    }
    data.flush().await?;
    data.shutdown().await?;

    info!("Sent {} bytes over data channel", total_bytes_sent);
    Ok(total_bytes_sent)
}

async fn read_before<R>(data: &mut R, buffer: &mut [u8], deadline: Option<Instant>) -> Result<usize>
where
    R: AsyncRead + Unpin,
{
    let n = match deadline {
        Some(deadline) => timeout_at(deadline, data.read(buffer))
            .await
            .map_err(|_| Error::new(ErrorKind::TimedOut, "data channel read deadline elapsed"))??,
        None => data.read(buffer).await?,
    };
    Ok(n)
}
