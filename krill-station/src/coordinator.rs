//! Print coordinator
//!
//! The orchestration entry point used by the UI: settings in, rendered job
//! out through the bridge, `PrintResult` back. Every failure - validation
//! or bridge - is folded into the result; nothing on this surface returns
//! an error the UI has to unwrap.

use std::sync::Arc;

use krill_bridge::{BridgeError, BridgeResult, PrintBridge};
use krill_labels::{build_batch, render_label, render_test_frame};
use shared::{PrintJobRequest, PrintResult, PrintSettings};
use tracing::{info, instrument, warn};

/// Print orchestration service
#[derive(Clone)]
pub struct PrintCoordinator {
    bridge: Arc<dyn PrintBridge>,
}

impl PrintCoordinator {
    /// Create a coordinator over a bridge capability
    pub fn new(bridge: Arc<dyn PrintBridge>) -> Self {
        Self { bridge }
    }

    /// Enumerate printers attached to the bridge daemon
    pub async fn list_printers(&self) -> BridgeResult<Vec<String>> {
        self.bridge.list_printers().await
    }

    /// Print a single calibration frame with the current settings.
    ///
    /// Emits a bordered rectangle at the label dimensions, shifted by the
    /// offsets and annotated with them, so the operator can dial in the
    /// stock alignment without burning a full label batch.
    #[instrument(skip(self, settings), fields(printer = %settings.printer_name))]
    pub async fn run_test_print(&self, settings: &PrintSettings) -> PrintResult {
        if !settings.has_printer() {
            return PrintResult::failure("", "no printer selected");
        }

        let frame = render_test_frame(settings);
        self.dispatch(&settings.printer_name, vec![frame]).await
    }

    /// Render and dispatch a full label batch.
    ///
    /// Validates the request, expands it into one label unit per copy,
    /// renders each unit to the selected stock and offsets, and submits the
    /// whole batch as one job.
    #[instrument(
        skip(self, request, settings),
        fields(printer = %settings.printer_name, sku = %request.item.sku, copies = request.copies)
    )]
    pub async fn run_batch_print(
        &self,
        request: &PrintJobRequest,
        settings: &PrintSettings,
    ) -> PrintResult {
        if !settings.has_printer() {
            return PrintResult::failure("", "no printer selected");
        }
        if request.code_value.is_empty() {
            return PrintResult::failure(&settings.printer_name, "code value is empty");
        }

        let batch = build_batch(
            &request.item,
            &request.code_value,
            request.copies,
            request.print_type,
        );
        let commands: Vec<String> = batch
            .iter()
            .map(|descriptor| {
                render_label(
                    descriptor,
                    &settings.label_size,
                    settings.offset_x,
                    settings.offset_y,
                )
            })
            .collect();

        self.dispatch(&settings.printer_name, commands).await
    }

    async fn dispatch(&self, printer_name: &str, commands: Vec<String>) -> PrintResult {
        match self.bridge.submit_job(printer_name, &commands).await {
            Ok(()) => {
                info!(labels = commands.len(), "Print job dispatched");
                PrintResult::ok(printer_name)
            }
            // The daemon's rejection text reaches the operator untouched
            Err(BridgeError::JobRejected(message)) => {
                warn!(%message, "Job rejected by bridge");
                PrintResult::failure(printer_name, message)
            }
            Err(err) => {
                warn!(error = %err, "Bridge dispatch failed");
                PrintResult::failure(printer_name, err.to_string())
            }
        }
    }
}

impl std::fmt::Debug for PrintCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintCoordinator")
            .field("bridge", &"<PrintBridge>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::{LabelItem, LabelSize, PrintType};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Accept,
        Reject(&'static str),
        NotFound,
        Unavailable,
    }

    /// Recording bridge mock
    struct MockBridge {
        behavior: Behavior,
        calls: AtomicUsize,
        jobs: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl MockBridge {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
                jobs: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PrintBridge for MockBridge {
        async fn list_printers(&self) -> BridgeResult<Vec<String>> {
            Ok(vec!["ZebraZD".to_string()])
        }

        async fn submit_job(&self, printer_name: &str, commands: &[String]) -> BridgeResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.jobs
                .lock()
                .unwrap()
                .push((printer_name.to_string(), commands.to_vec()));

            match self.behavior {
                Behavior::Accept => Ok(()),
                Behavior::Reject(msg) => Err(BridgeError::JobRejected(msg.to_string())),
                Behavior::NotFound => Err(BridgeError::PrinterNotFound(printer_name.to_string())),
                Behavior::Unavailable => {
                    Err(BridgeError::Unavailable("daemon not running".to_string()))
                }
            }
        }
    }

    fn settings_with_printer() -> PrintSettings {
        PrintSettings {
            printer_name: "ZebraZD".to_string(),
            label_size: LabelSize::new("2x1", 400, 200),
            offset_x: 0,
            offset_y: 0,
        }
    }

    fn widget_request(copies: u32, print_type: PrintType) -> PrintJobRequest {
        PrintJobRequest {
            item: LabelItem::new("SKU-10001", "Widget"),
            code_value: "SKU-10001".to_string(),
            copies,
            print_type,
        }
    }

    #[tokio::test]
    async fn test_test_print_without_printer_never_calls_bridge() {
        let bridge = MockBridge::new(Behavior::Accept);
        let coordinator = PrintCoordinator::new(bridge.clone());

        let result = coordinator
            .run_test_print(&PrintSettings::default())
            .await;

        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some("no printer selected"));
        assert_eq!(bridge.call_count(), 0);
    }

    #[tokio::test]
    async fn test_batch_print_with_empty_code_never_calls_bridge() {
        let bridge = MockBridge::new(Behavior::Accept);
        let coordinator = PrintCoordinator::new(bridge.clone());

        let mut request = widget_request(1, PrintType::Barcode);
        request.code_value = String::new();

        let result = coordinator
            .run_batch_print(&request, &settings_with_printer())
            .await;

        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some("code value is empty"));
        assert_eq!(bridge.call_count(), 0);
    }

    #[tokio::test]
    async fn test_test_print_dispatches_calibration_frame() {
        let bridge = MockBridge::new(Behavior::Accept);
        let coordinator = PrintCoordinator::new(bridge.clone());

        let mut settings = settings_with_printer();
        settings.offset_x = 15;
        settings.offset_y = -5;

        let result = coordinator.run_test_print(&settings).await;
        assert!(result.success);
        assert_eq!(result.printer_name, "ZebraZD");
        assert_eq!(bridge.call_count(), 1);

        let jobs = bridge.jobs.lock().unwrap();
        let (printer, commands) = &jobs[0];
        assert_eq!(printer, "ZebraZD");
        assert_eq!(commands.len(), 1);
        assert!(commands[0].contains("^GB400,200,3"));
        assert!(commands[0].contains("X+15 Y-5"));
    }

    #[tokio::test]
    async fn test_batch_print_end_to_end() {
        let bridge = MockBridge::new(Behavior::Accept);
        let coordinator = PrintCoordinator::new(bridge.clone());

        let result = coordinator
            .run_batch_print(
                &widget_request(2, PrintType::Both),
                &settings_with_printer(),
            )
            .await;

        assert!(result.success);
        assert_eq!(result.printer_name, "ZebraZD");
        assert!(result.error_message.is_none());
        assert_eq!(bridge.call_count(), 1);

        let jobs = bridge.jobs.lock().unwrap();
        let (_, commands) = &jobs[0];
        // One job carrying two label units
        assert_eq!(commands.len(), 2);
        for command in commands {
            assert!(command.contains("^PW400"));
            assert!(command.contains("^LL200"));
            assert!(command.contains("^BCN,"));
            assert!(command.contains("^BQN,"));
            assert!(command.contains("SKU-10001"));
        }
    }

    #[tokio::test]
    async fn test_zero_copies_still_prints_one_label() {
        let bridge = MockBridge::new(Behavior::Accept);
        let coordinator = PrintCoordinator::new(bridge.clone());

        // Bypasses PrintJobRequest::new on purpose: the builder clamps too
        let result = coordinator
            .run_batch_print(
                &widget_request(0, PrintType::Barcode),
                &settings_with_printer(),
            )
            .await;

        assert!(result.success);
        let jobs = bridge.jobs.lock().unwrap();
        assert_eq!(jobs[0].1.len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_message_passes_through_verbatim() {
        let bridge = MockBridge::new(Behavior::Reject("head open"));
        let coordinator = PrintCoordinator::new(bridge);

        let result = coordinator
            .run_batch_print(
                &widget_request(1, PrintType::Barcode),
                &settings_with_printer(),
            )
            .await;

        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some("head open"));
    }

    #[tokio::test]
    async fn test_bridge_taxonomy_surfaces_in_result() {
        let bridge = MockBridge::new(Behavior::NotFound);
        let coordinator = PrintCoordinator::new(bridge);

        let result = coordinator.run_test_print(&settings_with_printer()).await;
        assert!(!result.success);
        assert!(
            result
                .error_message
                .as_deref()
                .unwrap()
                .contains("Printer not found")
        );

        let bridge = MockBridge::new(Behavior::Unavailable);
        let coordinator = PrintCoordinator::new(bridge);

        let result = coordinator.run_test_print(&settings_with_printer()).await;
        assert!(!result.success);
        assert!(
            result
                .error_message
                .as_deref()
                .unwrap()
                .contains("Print bridge unavailable")
        );
    }
}
