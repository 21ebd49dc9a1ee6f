//! Transport layer for the bridge channel
//!
//! Frames are binary: event type byte, request UUID, correlation UUID
//! (nil means none), then length-prefixed signature and payload sections.
//! Both ends of the channel share the same codec.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::{Mutex, broadcast};
use uuid::Uuid;

use crate::error::{BridgeError, BridgeResult};
use shared::message::{BridgeMessage, EventType};

/// Upper bound on signature/payload sections; a frame claiming more is
/// treated as protocol corruption rather than an allocation request.
const MAX_SECTION_LEN: usize = 8 * 1024 * 1024;

/// Encode a message into its wire frame
pub fn encode_frame(msg: &BridgeMessage) -> Vec<u8> {
    let mut data = Vec::with_capacity(41 + msg.signature.len() + msg.payload.len());
    data.push(msg.event_type as u8);
    data.extend_from_slice(msg.request_id.as_bytes());

    let correlation_bytes = msg.correlation_id.unwrap_or(Uuid::nil()).into_bytes();
    data.extend_from_slice(&correlation_bytes);

    data.extend_from_slice(&(msg.signature.len() as u32).to_le_bytes());
    data.extend_from_slice(&msg.signature);

    data.extend_from_slice(&(msg.payload.len() as u32).to_le_bytes());
    data.extend_from_slice(&msg.payload);
    data
}

/// Read one frame from the channel
pub async fn read_frame<R: AsyncRead + Unpin>(reader: &mut R) -> BridgeResult<BridgeMessage> {
    // Event type (1 byte)
    let mut type_buf = [0u8; 1];
    reader.read_exact(&mut type_buf).await?;

    let event_type = EventType::try_from(type_buf[0])
        .map_err(|_| BridgeError::InvalidMessage("Invalid event type".into()))?;

    // Request ID (16 bytes)
    let mut uuid_buf = [0u8; 16];
    reader.read_exact(&mut uuid_buf).await?;
    let request_id = Uuid::from_bytes(uuid_buf);

    // Correlation ID (16 bytes)
    let mut correlation_buf = [0u8; 16];
    reader.read_exact(&mut correlation_buf).await?;
    let correlation_id_raw = Uuid::from_bytes(correlation_buf);
    let correlation_id = if correlation_id_raw.is_nil() {
        None
    } else {
        Some(correlation_id_raw)
    };

    // Signature (4-byte LE length + bytes)
    let signature = read_section(reader).await?;

    // Payload (4-byte LE length + bytes)
    let payload = read_section(reader).await?;

    Ok(BridgeMessage {
        request_id,
        event_type,
        correlation_id,
        signature,
        payload,
    })
}

async fn read_section<R: AsyncRead + Unpin>(reader: &mut R) -> BridgeResult<Vec<u8>> {
    let mut len_buf = [0u8; 4];
    reader.read_exact(&mut len_buf).await?;

    let len = u32::from_le_bytes(len_buf) as usize;
    if len > MAX_SECTION_LEN {
        return Err(BridgeError::InvalidMessage(format!(
            "Frame section too large: {} bytes",
            len
        )));
    }

    let mut data = vec![0u8; len];
    reader.read_exact(&mut data).await?;
    Ok(data)
}

/// Transport abstraction for the bridge channel
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn read_message(&self) -> BridgeResult<BridgeMessage>;
    async fn write_message(&self, msg: &BridgeMessage) -> BridgeResult<()>;
    async fn close(&self) -> BridgeResult<()>;
}

/// TCP Transport Implementation
#[derive(Debug, Clone)]
pub struct TcpTransport {
    reader: Arc<Mutex<OwnedReadHalf>>,
    writer: Arc<Mutex<OwnedWriteHalf>>,
}

impl TcpTransport {
    pub async fn connect(addr: &str) -> BridgeResult<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| BridgeError::Unavailable(format!("{}: {}", addr, e)))?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            reader: Arc::new(Mutex::new(reader)),
            writer: Arc::new(Mutex::new(writer)),
        })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn read_message(&self) -> BridgeResult<BridgeMessage> {
        let mut reader = self.reader.lock().await;
        read_frame(&mut *reader).await
    }

    async fn write_message(&self, msg: &BridgeMessage) -> BridgeResult<()> {
        let mut writer = self.writer.lock().await;
        writer.write_all(&encode_frame(msg)).await?;
        writer.flush().await?;
        Ok(())
    }

    async fn close(&self) -> BridgeResult<()> {
        // Dropping the Arc references will eventually close the stream
        Ok(())
    }
}

/// Memory Transport Implementation (for in-process daemons in tests)
#[derive(Debug, Clone)]
pub struct MemoryTransport {
    /// Receiver for messages FROM the daemon
    rx: Arc<Mutex<broadcast::Receiver<BridgeMessage>>>,
    /// Sender for messages TO the daemon
    tx: broadcast::Sender<BridgeMessage>,
}

impl MemoryTransport {
    /// Create a new memory transport
    ///
    /// # Arguments
    /// * `daemon_tx` - The daemon's broadcast sender (to subscribe to replies)
    /// * `to_daemon_tx` - The channel carrying frames TO the daemon
    pub fn new(
        daemon_tx: &broadcast::Sender<BridgeMessage>,
        to_daemon_tx: &broadcast::Sender<BridgeMessage>,
    ) -> Self {
        Self {
            rx: Arc::new(Mutex::new(daemon_tx.subscribe())),
            tx: to_daemon_tx.clone(),
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn read_message(&self) -> BridgeResult<BridgeMessage> {
        let mut rx = self.rx.lock().await;
        rx.recv()
            .await
            .map_err(|e| BridgeError::Unavailable(format!("Memory channel error: {}", e)))
    }

    async fn write_message(&self, msg: &BridgeMessage) -> BridgeResult<()> {
        self.tx
            .send(msg.clone())
            .map_err(|e| BridgeError::Unavailable(format!("Failed to send to daemon: {}", e)))?;
        Ok(())
    }

    async fn close(&self) -> BridgeResult<()> {
        Ok(())
    }
}
