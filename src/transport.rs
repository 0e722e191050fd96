//! Pluggable line transport: open/read/write/close over TCP, TLS, or a
//! scripted in-memory double for tests.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tracing::warn;

use crate::error::TransportError;

/// Maximum length, in bytes, of a single protocol line including tags but
/// excluding the CRLF terminator. IRCv3 message-tags raised this from the
/// RFC 1459 512-byte limit; 64 KiB comfortably covers tag-heavy lines.
pub const MAX_IRC_LINE_LEN: usize = 65536;

const MAX_LINE_PREVIEW_LEN: usize = 512;

/// The read half of a split [`Transport`]: owned exclusively by the
/// engine's reader task.
#[async_trait]
pub trait TransportReader: Send {
    /// Read the next line, or `None` on a clean EOF.
    async fn read_line(&mut self) -> Result<Option<String>, TransportError>;
}

/// The write half of a split [`Transport`]: owned exclusively by the
/// engine's writer task.
#[async_trait]
pub trait TransportWriter: Send {
    /// Write a single line; the transport appends the CRLF terminator.
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError>;

    /// Shut down the connection. Best-effort; errors are not actionable.
    async fn close(&mut self);
}

/// A bidirectional, line-oriented connection to an IRC server.
///
/// Implementors read and write whole lines (without CRLF) and enforce
/// [`MAX_IRC_LINE_LEN`] and the no-control-character rule themselves, or
/// delegate to [`read_line_limited`] as the concrete transports below do.
/// [`Transport::split`] divides the connection into independent reader and
/// writer halves so the engine's reader and writer tasks never contend on
/// the same lock — a blocked read must never stall outbound writes.
#[async_trait]
pub trait Transport: Send {
    /// Read the next line, or `None` on a clean EOF.
    async fn read_line(&mut self) -> Result<Option<String>, TransportError>;

    /// Write a single line; the transport appends the CRLF terminator.
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError>;

    /// Shut down the connection. Best-effort; errors are not actionable.
    async fn close(&mut self);

    /// Split into independently-owned reader and writer halves.
    fn split(self: Box<Self>) -> (Box<dyn TransportReader>, Box<dyn TransportWriter>);
}

/// A plain TCP transport.
pub struct TcpTransport {
    reader: BufReader<tokio::net::tcp::OwnedReadHalf>,
    writer: tokio::net::tcp::OwnedWriteHalf,
}

impl TcpTransport {
    /// Open a TCP connection to `host:port`, enabling keepalive probes.
    pub async fn connect(host: &str, port: u16) -> Result<Self, TransportError> {
        let stream = TcpStream::connect((host, port)).await?;
        if let Err(e) = enable_keepalive(&stream) {
            warn!(error = %e, "failed to enable TCP keepalive");
        }
        let (read, write) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read),
            writer: write,
        })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        read_line_limited(&mut self.reader).await
    }

    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        write_line_raw(&mut self.writer, line).await
    }

    async fn close(&mut self) {
        let _ = self.writer.shutdown().await;
    }

    fn split(self: Box<Self>) -> (Box<dyn TransportReader>, Box<dyn TransportWriter>) {
        let Self { reader, writer } = *self;
        (
            Box::new(TcpReaderHalf { reader }),
            Box::new(TcpWriterHalf { writer }),
        )
    }
}

struct TcpReaderHalf {
    reader: BufReader<tokio::net::tcp::OwnedReadHalf>,
}

#[async_trait]
impl TransportReader for TcpReaderHalf {
    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        read_line_limited(&mut self.reader).await
    }
}

struct TcpWriterHalf {
    writer: tokio::net::tcp::OwnedWriteHalf,
}

#[async_trait]
impl TransportWriter for TcpWriterHalf {
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        write_line_raw(&mut self.writer, line).await
    }

    async fn close(&mut self) {
        let _ = self.writer.shutdown().await;
    }
}

/// A TLS-over-TCP transport, using the platform's native trust store.
pub struct TlsTransport {
    reader: BufReader<tokio::io::ReadHalf<TlsStream<TcpStream>>>,
    writer: tokio::io::WriteHalf<TlsStream<TcpStream>>,
}

impl TlsTransport {
    /// Open a TCP connection to `host:port` and perform a TLS handshake.
    pub async fn connect(host: &str, port: u16) -> Result<Self, TransportError> {
        let tcp = TcpStream::connect((host, port)).await?;
        if let Err(e) = enable_keepalive(&tcp) {
            warn!(error = %e, "failed to enable TCP keepalive");
        }

        let mut roots = tokio_rustls::rustls::RootCertStore::empty();
        for cert in rustls_native_certs::load_native_certs().certs {
            let _ = roots.add(cert);
        }

        let config = tokio_rustls::rustls::ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        let connector = tokio_rustls::TlsConnector::from(std::sync::Arc::new(config));

        let server_name = tokio_rustls::rustls::pki_types::ServerName::try_from(host.to_owned())
            .map_err(|_| {
                TransportError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid TLS server name: {host}"),
                ))
            })?;

        let stream = connector.connect(server_name, tcp).await?;
        let (read, write) = tokio::io::split(stream);
        Ok(Self {
            reader: BufReader::new(read),
            writer: write,
        })
    }
}

#[async_trait]
impl Transport for TlsTransport {
    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        read_line_limited(&mut self.reader).await
    }

    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        write_line_raw(&mut self.writer, line).await
    }

    async fn close(&mut self) {
        let _ = self.writer.shutdown().await;
    }

    fn split(self: Box<Self>) -> (Box<dyn TransportReader>, Box<dyn TransportWriter>) {
        let Self { reader, writer } = *self;
        (
            Box::new(TlsReaderHalf { reader }),
            Box::new(TlsWriterHalf { writer }),
        )
    }
}

struct TlsReaderHalf {
    reader: BufReader<tokio::io::ReadHalf<TlsStream<TcpStream>>>,
}

#[async_trait]
impl TransportReader for TlsReaderHalf {
    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        read_line_limited(&mut self.reader).await
    }
}

struct TlsWriterHalf {
    writer: tokio::io::WriteHalf<TlsStream<TcpStream>>,
}

#[async_trait]
impl TransportWriter for TlsWriterHalf {
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        write_line_raw(&mut self.writer, line).await
    }

    async fn close(&mut self) {
        let _ = self.writer.shutdown().await;
    }
}

fn enable_keepalive(stream: &TcpStream) -> std::io::Result<()> {
    use socket2::{SockRef, TcpKeepalive};

    let sock = SockRef::from(stream);
    let keepalive = TcpKeepalive::new()
        .with_time(Duration::from_secs(120))
        .with_interval(Duration::from_secs(30));
    sock.set_tcp_keepalive(&keepalive)
}

async fn write_line_raw<W>(writer: &mut W, line: &str) -> Result<(), TransportError>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\r\n").await?;
    writer.flush().await?;
    Ok(())
}

async fn read_line_limited<R>(reader: &mut BufReader<R>) -> Result<Option<String>, TransportError>
where
    R: AsyncRead + Unpin,
{
    let mut line: Vec<u8> = Vec::with_capacity(512);
    let mut exceeded_limit = false;

    loop {
        let buffer = reader.fill_buf().await?;

        if buffer.is_empty() {
            if line.is_empty() && !exceeded_limit {
                return Ok(None);
            }
            break;
        }

        let newline_pos = buffer.iter().position(|&b| b == b'\n');
        let to_consume = newline_pos.map_or(buffer.len(), |idx| idx + 1);

        if !exceeded_limit {
            let projected_len = line.len().saturating_add(to_consume);
            if projected_len > MAX_IRC_LINE_LEN {
                let available = MAX_IRC_LINE_LEN.saturating_sub(line.len());
                line.extend_from_slice(&buffer[..available.min(buffer.len())]);
                exceeded_limit = true;
            } else {
                line.extend_from_slice(&buffer[..to_consume]);
            }
        }

        reader.consume(to_consume);

        if newline_pos.is_some() {
            break;
        }
    }

    if exceeded_limit {
        warn!(length = line.len(), limit = MAX_IRC_LINE_LEN, "line exceeds byte limit");
        let preview_len = line.len().min(MAX_LINE_PREVIEW_LEN);
        let preview = String::from_utf8_lossy(&line[..preview_len]).to_string();
        return Err(TransportError::LineTooLong { preview });
    }

    while matches!(line.last(), Some(b'\r') | Some(b'\n')) {
        line.pop();
    }

    if line.is_empty() {
        return Ok(Some(String::new()));
    }

    let line_str = String::from_utf8_lossy(&line).to_string();
    for ch in line_str.bytes() {
        if ch == 0 || (ch < 0x20 && ch != b'\r' && ch != b'\n' && ch != 0x01) {
            let preview = line_str.chars().take(MAX_LINE_PREVIEW_LEN).collect();
            return Err(TransportError::IllegalControlChar { ch, preview });
        }
    }

    Ok(Some(line_str))
}

#[derive(Default)]
struct MockState {
    to_read: std::collections::VecDeque<String>,
    written: Vec<String>,
    closed: bool,
}

/// A scripted in-memory [`Transport`] for deterministic engine tests.
///
/// Lines queued with [`MockTransport::queue_read`] are returned in order
/// from [`Transport::read_line`]; lines passed to [`Transport::write_line`]
/// accumulate and can be inspected with [`MockTransport::written_lines`].
/// Internally the state lives behind an `Arc<Mutex<_>>` so that
/// [`Transport::split`] can hand out independent reader/writer handles that
/// still share the same queue and recorded output.
#[derive(Default)]
pub struct MockTransport {
    state: std::sync::Arc<std::sync::Mutex<MockState>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a line to be returned by a future `read_line` call.
    pub fn queue_read(&mut self, line: impl Into<String>) {
        self.state.lock().unwrap().to_read.push_back(line.into());
    }

    /// All lines written so far, in order, without CRLF.
    #[must_use]
    pub fn written_lines(&self) -> Vec<String> {
        self.state.lock().unwrap().written.clone()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }

    /// A cloneable handle for inspecting state after this transport has
    /// been split and moved into an engine.
    #[must_use]
    pub fn handle(&self) -> MockTransportHandle {
        MockTransportHandle {
            state: self.state.clone(),
        }
    }
}

/// A cloneable reference to a [`MockTransport`]'s recorded state, usable
/// after the transport itself has been consumed by [`Transport::split`].
#[derive(Clone, Default)]
pub struct MockTransportHandle {
    state: std::sync::Arc<std::sync::Mutex<MockState>>,
}

impl MockTransportHandle {
    pub fn queue_read(&self, line: impl Into<String>) {
        self.state.lock().unwrap().to_read.push_back(line.into());
    }

    #[must_use]
    pub fn written_lines(&self) -> Vec<String> {
        self.state.lock().unwrap().written.clone()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        Ok(self.state.lock().unwrap().to_read.pop_front())
    }

    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        self.state.lock().unwrap().written.push(line.to_owned());
        Ok(())
    }

    async fn close(&mut self) {
        self.state.lock().unwrap().closed = true;
    }

    fn split(self: Box<Self>) -> (Box<dyn TransportReader>, Box<dyn TransportWriter>) {
        let state = self.state;
        (
            Box::new(MockReaderHalf {
                state: state.clone(),
            }),
            Box::new(MockWriterHalf { state }),
        )
    }
}

struct MockReaderHalf {
    state: std::sync::Arc<std::sync::Mutex<MockState>>,
}

#[async_trait]
impl TransportReader for MockReaderHalf {
    async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        Ok(self.state.lock().unwrap().to_read.pop_front())
    }
}

struct MockWriterHalf {
    state: std::sync::Arc<std::sync::Mutex<MockState>>,
}

#[async_trait]
impl TransportWriter for MockWriterHalf {
    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        self.state.lock().unwrap().written.push(line.to_owned());
        Ok(())
    }

    async fn close(&mut self) {
        self.state.lock().unwrap().closed = true;
    }
}
