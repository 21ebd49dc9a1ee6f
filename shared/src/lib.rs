//! Shared types for the Krill print layer
//!
//! Common types used across multiple crates: domain models for label
//! printing and the wire protocol spoken to the local print bridge daemon.

pub mod message;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Message bus re-exports (for convenient access)
pub use message::{BridgeMessage, EventType};

// Model re-exports
pub use models::{
    LabelItem, LabelSize, PrintJobRequest, PrintResult, PrintSettings, PrintSettingsPatch,
    PrintType, QuickAlign,
};
