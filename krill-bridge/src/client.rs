//! Bridge client
//!
//! Request/response client over a bridge transport. The session opens with
//! a versioned handshake; afterwards the daemon answers printer enumeration
//! and signed job submissions. One exchange runs at a time - the protocol
//! has no interleaving, and a station session allows a single job in flight.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::error::{BridgeError, BridgeResult};
use crate::signer::JobSigner;
use crate::transport::{MemoryTransport, TcpTransport, Transport};
use shared::message::{
    BridgeMessage, ERR_PRINTER_NOT_FOUND, EventType, HandshakeAckPayload, HandshakePayload,
    JobAckPayload, PROTOCOL_VERSION, PrinterListPayload, SubmitJobPayload,
};

/// Capability interface to the print bridge
///
/// The coordinator depends on this trait, not on a concrete client, so
/// tests can substitute a recording mock.
#[async_trait]
pub trait PrintBridge: Send + Sync {
    /// Enumerate printers currently attached to the daemon
    async fn list_printers(&self) -> BridgeResult<Vec<String>>;

    /// Submit one rendered job for a named printer
    async fn submit_job(&self, printer_name: &str, commands: &[String]) -> BridgeResult<()>;
}

#[derive(Debug, Clone)]
enum ClientTransport {
    Tcp(TcpTransport),
    Memory(MemoryTransport),
}

impl ClientTransport {
    async fn read_message(&self) -> BridgeResult<BridgeMessage> {
        match self {
            ClientTransport::Tcp(t) => t.read_message().await,
            ClientTransport::Memory(t) => t.read_message().await,
        }
    }

    async fn write_message(&self, msg: &BridgeMessage) -> BridgeResult<()> {
        match self {
            ClientTransport::Tcp(t) => t.write_message(msg).await,
            ClientTransport::Memory(t) => t.write_message(msg).await,
        }
    }
}

/// Client for one bridge session
pub struct BridgeClient {
    transport: ClientTransport,
    signer: Arc<dyn JobSigner>,
    exchange_lock: Mutex<()>,
}

impl BridgeClient {
    /// Connect to the daemon over TCP and perform the session handshake
    pub async fn connect(
        addr: &str,
        signer: Arc<dyn JobSigner>,
        station_name: Option<String>,
    ) -> BridgeResult<Self> {
        let transport = ClientTransport::Tcp(TcpTransport::connect(addr).await?);
        Self::open(transport, signer, station_name).await
    }

    /// Open a session over an in-process memory transport
    pub async fn with_memory_transport(
        transport: MemoryTransport,
        signer: Arc<dyn JobSigner>,
        station_name: Option<String>,
    ) -> BridgeResult<Self> {
        Self::open(ClientTransport::Memory(transport), signer, station_name).await
    }

    async fn open(
        transport: ClientTransport,
        signer: Arc<dyn JobSigner>,
        station_name: Option<String>,
    ) -> BridgeResult<Self> {
        let client = Self {
            transport,
            signer,
            exchange_lock: Mutex::new(()),
        };
        client.handshake(station_name).await?;
        Ok(client)
    }

    async fn handshake(&self, station_name: Option<String>) -> BridgeResult<()> {
        let payload = HandshakePayload {
            version: PROTOCOL_VERSION,
            station_name,
            key_fingerprint: self.signer.key_fingerprint(),
        };

        let reply = self.exchange(BridgeMessage::handshake(&payload)).await?;
        if reply.event_type != EventType::HandshakeAck {
            return Err(BridgeError::InvalidMessage(format!(
                "Expected handshake_ack, got {}",
                reply.event_type
            )));
        }

        let ack: HandshakeAckPayload = reply.parse_payload()?;
        if !ack.accepted {
            return Err(BridgeError::HandshakeRejected(
                ack.message.unwrap_or_else(|| "Handshake rejected".into()),
            ));
        }

        let fingerprint = &payload.key_fingerprint;
        let short = &fingerprint[..12.min(fingerprint.len())];
        info!(fingerprint = %short, "Bridge session established");
        Ok(())
    }

    /// Send one frame and read its reply, checking the correlation ID
    async fn exchange(&self, msg: BridgeMessage) -> BridgeResult<BridgeMessage> {
        let _guard = self.exchange_lock.lock().await;

        self.transport.write_message(&msg).await?;
        let reply = self.transport.read_message().await?;

        if reply.correlation_id != Some(msg.request_id) {
            return Err(BridgeError::InvalidMessage(
                "Reply does not correlate with request".into(),
            ));
        }
        Ok(reply)
    }
}

#[async_trait]
impl PrintBridge for BridgeClient {
    #[instrument(skip(self))]
    async fn list_printers(&self) -> BridgeResult<Vec<String>> {
        let reply = self.exchange(BridgeMessage::list_printers()).await?;
        if reply.event_type != EventType::PrinterList {
            return Err(BridgeError::InvalidMessage(format!(
                "Expected printer_list, got {}",
                reply.event_type
            )));
        }

        let payload: PrinterListPayload = reply.parse_payload()?;
        info!(count = payload.printers.len(), "Printers enumerated");
        Ok(payload.printers)
    }

    #[instrument(skip(self, commands), fields(printer = %printer_name, labels = commands.len()))]
    async fn submit_job(&self, printer_name: &str, commands: &[String]) -> BridgeResult<()> {
        let payload = SubmitJobPayload {
            printer_name: printer_name.to_string(),
            commands: commands.to_vec(),
        };

        let msg = BridgeMessage::submit_job(&payload);
        let signature = self.signer.sign(&msg.payload).await?;
        let msg = msg.with_signature(signature);

        let reply = self.exchange(msg).await?;
        if reply.event_type != EventType::JobAck {
            return Err(BridgeError::InvalidMessage(format!(
                "Expected job_ack, got {}",
                reply.event_type
            )));
        }

        let ack: JobAckPayload = reply.parse_payload()?;
        if ack.accepted {
            info!("Job dispatched");
            return Ok(());
        }

        match ack.error_code.as_deref() {
            Some(ERR_PRINTER_NOT_FOUND) => {
                Err(BridgeError::PrinterNotFound(printer_name.to_string()))
            }
            _ => Err(BridgeError::JobRejected(
                ack.message.unwrap_or_else(|| "Job rejected".into()),
            )),
        }
    }
}

impl std::fmt::Debug for BridgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeClient")
            .field("transport", &self.transport)
            .field("signer", &"<JobSigner>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast;

    /// Signer stub with a fixed signature; signature checks live in the
    /// integration tests against the real RSA primitives.
    struct StaticSigner;

    #[async_trait]
    impl JobSigner for StaticSigner {
        fn public_key_pem(&self) -> BridgeResult<String> {
            Ok("-----BEGIN PUBLIC KEY-----".into())
        }

        fn key_fingerprint(&self) -> String {
            "deadbeef".into()
        }

        async fn sign(&self, _data: &[u8]) -> BridgeResult<Vec<u8>> {
            Ok(b"sig".to_vec())
        }
    }

    /// Wire up a memory transport and an in-process daemon answering with
    /// the given closure. Frames the daemon received are recorded.
    fn spawn_daemon<F>(reply_fn: F) -> (MemoryTransport, Arc<std::sync::Mutex<Vec<BridgeMessage>>>)
    where
        F: Fn(&BridgeMessage) -> Option<BridgeMessage> + Send + 'static,
    {
        let (daemon_tx, _) = broadcast::channel(16);
        let (to_daemon_tx, mut to_daemon_rx) = broadcast::channel(16);
        let transport = MemoryTransport::new(&daemon_tx, &to_daemon_tx);

        let received = Arc::new(std::sync::Mutex::new(Vec::new()));
        let record = received.clone();

        tokio::spawn(async move {
            while let Ok(msg) = to_daemon_rx.recv().await {
                record.lock().unwrap().push(msg.clone());
                if let Some(reply) = reply_fn(&msg) {
                    let _ = daemon_tx.send(reply.with_correlation_id(msg.request_id));
                }
            }
        });

        (transport, received)
    }

    fn accepting_daemon(msg: &BridgeMessage) -> Option<BridgeMessage> {
        match msg.event_type {
            EventType::Handshake => Some(BridgeMessage::handshake_ack(
                &HandshakeAckPayload::accepted(),
            )),
            EventType::ListPrinters => Some(BridgeMessage::printer_list(&PrinterListPayload {
                printers: vec!["ZebraZD".to_string(), "Back Office".to_string()],
            })),
            EventType::SubmitJob => Some(BridgeMessage::job_ack(&JobAckPayload::accepted(
                "ZebraZD",
            ))),
            _ => None,
        }
    }

    async fn connect(transport: MemoryTransport) -> BridgeResult<BridgeClient> {
        BridgeClient::with_memory_transport(
            transport,
            Arc::new(StaticSigner),
            Some("test-station".into()),
        )
        .await
    }

    #[tokio::test]
    async fn test_handshake_and_list_printers() {
        let (transport, _) = spawn_daemon(accepting_daemon);

        let client = connect(transport).await.unwrap();
        let printers = client.list_printers().await.unwrap();
        assert_eq!(printers, vec!["ZebraZD", "Back Office"]);
    }

    #[tokio::test]
    async fn test_handshake_rejected() {
        let (transport, _) = spawn_daemon(|msg| match msg.event_type {
            EventType::Handshake => Some(BridgeMessage::handshake_ack(
                &HandshakeAckPayload::rejected("unknown signing key"),
            )),
            _ => None,
        });

        let err = connect(transport).await.unwrap_err();
        match err {
            BridgeError::HandshakeRejected(msg) => assert_eq!(msg, "unknown signing key"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_submit_job_signs_payload() {
        let (transport, received) = spawn_daemon(accepting_daemon);

        let client = connect(transport).await.unwrap();
        client
            .submit_job("ZebraZD", &["^XA^XZ".to_string()])
            .await
            .unwrap();

        let frames = received.lock().unwrap();
        let job = frames
            .iter()
            .find(|m| m.event_type == EventType::SubmitJob)
            .expect("daemon saw no job");
        assert_eq!(job.signature, b"sig".to_vec());

        let payload: SubmitJobPayload = job.parse_payload().unwrap();
        assert_eq!(payload.printer_name, "ZebraZD");
        assert_eq!(payload.commands, vec!["^XA^XZ".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_job_printer_not_found() {
        let (transport, _) = spawn_daemon(|msg| match msg.event_type {
            EventType::Handshake => Some(BridgeMessage::handshake_ack(
                &HandshakeAckPayload::accepted(),
            )),
            EventType::SubmitJob => Some(BridgeMessage::job_ack(&JobAckPayload::rejected(
                "Ghost",
                "no such printer",
                Some(ERR_PRINTER_NOT_FOUND.to_string()),
            ))),
            _ => None,
        });

        let client = connect(transport).await.unwrap();
        let err = client
            .submit_job("Ghost", &["^XA^XZ".to_string()])
            .await
            .unwrap_err();

        match err {
            BridgeError::PrinterNotFound(name) => assert_eq!(name, "Ghost"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_submit_job_rejection_message_verbatim() {
        let (transport, _) = spawn_daemon(|msg| match msg.event_type {
            EventType::Handshake => Some(BridgeMessage::handshake_ack(
                &HandshakeAckPayload::accepted(),
            )),
            EventType::SubmitJob => Some(BridgeMessage::job_ack(&JobAckPayload::rejected(
                "ZebraZD",
                "head open",
                None,
            ))),
            _ => None,
        });

        let client = connect(transport).await.unwrap();
        let err = client
            .submit_job("ZebraZD", &["^XA^XZ".to_string()])
            .await
            .unwrap_err();

        match err {
            BridgeError::JobRejected(msg) => assert_eq!(msg, "head open"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
