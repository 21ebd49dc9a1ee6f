//! Run a calibration test print against a live bridge daemon.
//!
//! ```text
//! BRIDGE_ADDR=127.0.0.1:9440 SIGNING_KEY_PATH=./station.key \
//!     cargo run -p krill-station --example test_print
//! ```

use std::sync::Arc;

use anyhow::{Context, bail};
use krill_bridge::{BridgeClient, RsaSigner};
use krill_station::{PrintCoordinator, SettingsStore, setup_environment};
use shared::PrintSettingsPatch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment();

    let signer = Arc::new(
        RsaSigner::from_file(&config.signing_key_path)
            .with_context(|| format!("loading signing key from {}", config.signing_key_path))?,
    );

    let client = BridgeClient::connect(
        &config.bridge_addr,
        signer,
        Some(config.station_name.clone()),
    )
    .await
    .with_context(|| format!("connecting to bridge at {}", config.bridge_addr))?;

    let coordinator = PrintCoordinator::new(Arc::new(client));

    let printers = coordinator.list_printers().await?;
    let Some(printer) = printers.first() else {
        bail!("bridge reports no attached printers");
    };
    println!("Printers: {:?}", printers);

    let store = SettingsStore::new();
    store.update(PrintSettingsPatch {
        printer_name: Some(printer.clone()),
        ..Default::default()
    });

    let result = coordinator.run_test_print(&store.get()).await;
    if result.success {
        println!("Calibration frame sent to {}", result.printer_name);
    } else {
        println!(
            "Test print failed: {}",
            result.error_message.unwrap_or_default()
        );
    }

    Ok(())
}
