//! # krill-bridge
//!
//! Client for the local print bridge daemon.
//!
//! The daemon mediates between the station process and physical printer
//! hardware. This crate speaks its framed request/response protocol:
//! a versioned handshake opens the session, printer enumeration and job
//! submission follow, and every job-submission frame carries an RSA
//! signature the daemon verifies against the station's registered key.
//!
//! Connection state is binary: a client either holds a live channel or the
//! caller gets an error and re-connects. There is no retry, backoff or
//! queueing here; a failed call surfaces immediately and the operator
//! decides what to do.
//!
//! ## Example
//!
//! ```ignore
//! use krill_bridge::{BridgeClient, PrintBridge, RsaSigner};
//! use std::sync::Arc;
//!
//! let signer = Arc::new(RsaSigner::from_file("station.key")?);
//! let client = BridgeClient::connect("127.0.0.1:9440", signer, None).await?;
//!
//! let printers = client.list_printers().await?;
//! client.submit_job(&printers[0], &commands).await?;
//! ```

mod client;
mod error;
mod signer;
mod transport;

// Re-exports
pub use client::{BridgeClient, PrintBridge};
pub use error::{BridgeError, BridgeResult};
pub use signer::{JobSigner, RsaSigner, verify_signature};
pub use transport::{MemoryTransport, TcpTransport, Transport, encode_frame, read_frame};
