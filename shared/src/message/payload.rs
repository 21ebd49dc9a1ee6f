use serde::{Deserialize, Serialize};

// ==================== Error codes ====================

/// Daemon error code: the named printer is not attached.
pub const ERR_PRINTER_NOT_FOUND: &str = "printer_not_found";

/// Daemon error code: the job signature did not verify.
pub const ERR_SIGNATURE_INVALID: &str = "signature_invalid";

// ==================== Payloads ====================

/// Handshake payload (station -> daemon)
///
/// Opens a session: the daemon checks the protocol version and selects the
/// registered public key matching `key_fingerprint` for later job
/// verification. The key itself was registered out of band; this is a fixed
/// one-time setup, not a per-job negotiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandshakePayload {
    /// Protocol version
    pub version: u16,
    /// Station name/identifier shown in daemon logs
    pub station_name: Option<String>,
    /// SHA-256 fingerprint (base64) of the station's signing public key
    pub key_fingerprint: String,
}

/// Handshake acknowledgement (daemon -> station)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandshakeAckPayload {
    /// Whether the daemon accepted the session
    pub accepted: bool,
    /// Rejection reason (version mismatch, unknown key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Printer enumeration response (daemon -> station)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterListPayload {
    /// Names of printers currently attached to the daemon
    pub printers: Vec<String>,
}

/// Job submission (station -> daemon)
///
/// `commands` is an ordered sequence of printer-control command blocks
/// (one label unit per entry); the daemon streams them to the named printer
/// in order. The enclosing frame carries the signature over this payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitJobPayload {
    pub printer_name: String,
    pub commands: Vec<String>,
}

/// Job acknowledgement (daemon -> station)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobAckPayload {
    /// Whether the job was dispatched to the printer
    pub accepted: bool,
    /// Printer the job was addressed to
    pub printer_name: String,
    /// Error description, passed through to the operator verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable error code (see the `ERR_*` constants)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

// ==================== Convenience Constructors ====================

impl HandshakeAckPayload {
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: Some(message.into()),
        }
    }
}

impl JobAckPayload {
    pub fn accepted(printer_name: impl Into<String>) -> Self {
        Self {
            accepted: true,
            printer_name: printer_name.into(),
            message: None,
            error_code: None,
        }
    }

    pub fn rejected(
        printer_name: impl Into<String>,
        message: impl Into<String>,
        error_code: Option<String>,
    ) -> Self {
        Self {
            accepted: false,
            printer_name: printer_name.into(),
            message: Some(message.into()),
            error_code,
        }
    }
}
