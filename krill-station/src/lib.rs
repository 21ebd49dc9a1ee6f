//! Krill Print Station - operator-facing print coordination
//!
//! # Overview
//!
//! This crate is the entry point the UI talks to:
//!
//! - **Settings** (`settings`): session-scoped calibration state
//! - **Coordinator** (`coordinator`): test/batch print orchestration
//! - **Catalog** (`catalog`): item lookup collaborator
//! - **Config** (`config`): environment-driven station configuration
//!
//! # Module structure
//!
//! ```text
//! krill-station/src/
//! ├── config.rs       # env config
//! ├── logger.rs       # tracing bootstrap
//! ├── settings.rs     # print settings store
//! ├── catalog.rs      # item catalog
//! └── coordinator.rs  # print coordinator
//! ```

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod logger;
pub mod settings;

// Re-export public types
pub use catalog::ItemCatalog;
pub use config::StationConfig;
pub use coordinator::PrintCoordinator;
pub use settings::{SettingsStore, parse_offset};

/// Load `.env`, read the station config and initialize logging.
///
/// Call once at process start, before anything logs.
pub fn setup_environment() -> StationConfig {
    dotenv::dotenv().ok();

    let config = StationConfig::from_env();
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
