use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use catalog_core::Generation;
use catalog_logging::{catalog_debug, catalog_error};

use crate::fetch::{fetch_courses_and_categories, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineError, EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    FetchCatalog { generation: Generation },
    Stop,
}

/// Runs fetches on a background tokio runtime and reports completions as events.
///
/// Stopping or dropping the handle ends the background thread; fetches still
/// in flight are abandoned and the event channel disconnects.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let endpoint = settings.endpoint.clone();
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)), endpoint)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        endpoint: impl Into<String>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let endpoint: String = endpoint.into();
        let endpoint: Arc<str> = Arc::from(endpoint);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("catalog-fetch")
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("catalog-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let generation = match command {
                        EngineCommand::FetchCatalog { generation } => generation,
                        EngineCommand::Stop => break,
                    };
                    let fetcher = fetcher.clone();
                    let endpoint = endpoint.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(run_fetch(fetcher, endpoint, generation, event_tx));
                }
                catalog_debug!("Engine stopped");
            })
            .map_err(EngineError::Thread)?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_catalog(&self, generation: Generation) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchCatalog { generation });
    }

    pub fn stop(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Stop);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        self.event_rx.recv_timeout(timeout)
    }
}

/// Runs one fetch in its own task so a panic still produces a completion event.
async fn run_fetch(
    fetcher: Arc<dyn Fetcher>,
    endpoint: Arc<str>,
    generation: Generation,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    catalog_debug!("Fetching catalog for generation {}", generation);
    let task = tokio::spawn(async move {
        fetch_courses_and_categories(fetcher.as_ref(), &endpoint).await
    });
    let result = match task.await {
        Ok(result) => result,
        Err(err) => {
            catalog_error!("Fetch task for generation {} aborted: {}", generation, err);
            Err(FetchError::new(FailureKind::Aborted, err.to_string()))
        }
    };
    let _ = event_tx.send(EngineEvent::CatalogFetched { generation, result });
}
