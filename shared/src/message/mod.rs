//! Bridge protocol message types
//!
//! These types are shared between the print station and the local print
//! bridge daemon. The daemon mediates access to physical printers; the
//! station talks to it over a framed, request/response channel in which
//! job-submission frames carry a detached signature.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use uuid::Uuid;

pub mod payload;
pub use payload::*;

/// Protocol version number
pub const PROTOCOL_VERSION: u16 = 1;

/// Bridge channel event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Session handshake (station -> daemon)
    Handshake = 0,
    /// Handshake acknowledgement (daemon -> station)
    HandshakeAck = 1,
    /// Printer enumeration request (station -> daemon)
    ListPrinters = 2,
    /// Printer enumeration response (daemon -> station)
    PrinterList = 3,
    /// Signed job submission (station -> daemon)
    SubmitJob = 4,
    /// Job acknowledgement (daemon -> station)
    JobAck = 5,
}

impl TryFrom<u8> for EventType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventType::Handshake),
            1 => Ok(EventType::HandshakeAck),
            2 => Ok(EventType::ListPrinters),
            3 => Ok(EventType::PrinterList),
            4 => Ok(EventType::SubmitJob),
            5 => Ok(EventType::JobAck),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Handshake => write!(f, "handshake"),
            EventType::HandshakeAck => write!(f, "handshake_ack"),
            EventType::ListPrinters => write!(f, "list_printers"),
            EventType::PrinterList => write!(f, "printer_list"),
            EventType::SubmitJob => write!(f, "submit_job"),
            EventType::JobAck => write!(f, "job_ack"),
        }
    }
}

/// One frame on the bridge channel.
///
/// `signature` is non-empty only on `SubmitJob` frames, where it holds the
/// RSA signature over `payload`. Responses echo the originating frame's
/// `request_id` in `correlation_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeMessage {
    pub request_id: Uuid,
    pub event_type: EventType,
    pub correlation_id: Option<Uuid>,
    pub signature: Vec<u8>,
    pub payload: Vec<u8>,
}

impl BridgeMessage {
    pub fn new(event_type: EventType, payload: Vec<u8>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            event_type,
            correlation_id: None,
            signature: Vec::new(),
            payload,
        }
    }

    /// Set the correlation ID (responses reference the request they answer)
    pub fn with_correlation_id(mut self, id: Uuid) -> Self {
        self.correlation_id = Some(id);
        self
    }

    /// Attach a detached signature over the payload
    pub fn with_signature(mut self, signature: Vec<u8>) -> Self {
        self.signature = signature;
        self
    }

    /// Create a handshake frame
    pub fn handshake(payload: &HandshakePayload) -> Self {
        Self::new(
            EventType::Handshake,
            serde_json::to_vec(payload).expect("Failed to serialize handshake payload"),
        )
    }

    /// Create a handshake acknowledgement frame
    pub fn handshake_ack(payload: &HandshakeAckPayload) -> Self {
        Self::new(
            EventType::HandshakeAck,
            serde_json::to_vec(payload).expect("Failed to serialize handshake ack"),
        )
    }

    /// Create a printer enumeration request (empty payload)
    pub fn list_printers() -> Self {
        Self::new(EventType::ListPrinters, Vec::new())
    }

    /// Create a printer enumeration response frame
    pub fn printer_list(payload: &PrinterListPayload) -> Self {
        Self::new(
            EventType::PrinterList,
            serde_json::to_vec(payload).expect("Failed to serialize printer list"),
        )
    }

    /// Create an (unsigned) job submission frame; the client signs it
    /// before dispatch.
    pub fn submit_job(payload: &SubmitJobPayload) -> Self {
        Self::new(
            EventType::SubmitJob,
            serde_json::to_vec(payload).expect("Failed to serialize job submission"),
        )
    }

    /// Create a job acknowledgement frame
    pub fn job_ack(payload: &JobAckPayload) -> Self {
        Self::new(
            EventType::JobAck,
            serde_json::to_vec(payload).expect("Failed to serialize job ack"),
        )
    }

    /// Parse the payload as the given type
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}
