use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

use catalog_core::{update, CategoryId, Effect, Msg, StoreKind, StoreState, StoreViewModel};
use catalog_engine::{EngineError, EngineEvent, EngineHandle, FetchSettings};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

/// One state container wired to its own fetch engine.
///
/// All mutations go through [`update`]; effects it returns are handed to the
/// engine, and engine events come back in through [`CatalogStore::pump`].
/// Fetch failures are logged here and never returned to the caller.
pub struct CatalogStore {
    state: StoreState,
    engine: EngineHandle,
}

impl CatalogStore {
    pub fn new(kind: StoreKind, settings: FetchSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(kind, EngineHandle::new(settings)?))
    }

    pub fn launches(settings: FetchSettings) -> Result<Self, EngineError> {
        Self::new(StoreKind::Launches, settings)
    }

    pub fn categories(settings: FetchSettings) -> Result<Self, EngineError> {
        Self::new(StoreKind::CategoriesOnly, settings)
    }

    pub fn with_engine(kind: StoreKind, engine: EngineHandle) -> Self {
        Self {
            state: StoreState::new(kind),
            engine,
        }
    }

    pub fn init(&mut self) {
        self.dispatch(Msg::InitRequested);
    }

    pub fn fetch(&mut self) {
        self.dispatch(Msg::FetchRequested);
    }

    pub fn set_filter(&mut self, id: Option<CategoryId>) {
        self.dispatch(Msg::FilterToggled(id));
    }

    pub fn reset_store(&mut self) {
        self.dispatch(Msg::ResetRequested);
    }

    /// Applies every engine event received so far. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.engine.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Blocks until no fetch is loading or `timeout` elapses.
    /// Returns `false` on timeout or if the engine has stopped.
    pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        self.pump();
        while self.state.loading() {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => Duration::from_secs(3600),
            };
            if remaining.is_zero() {
                return false;
            }
            match self.engine.recv_timeout(remaining) {
                Ok(event) => self.apply_event(event),
                Err(RecvTimeoutError::Timeout) if deadline.is_some() => {
                    return !self.state.loading()
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    catalog_warn!("Engine stopped while a fetch was loading");
                    return false;
                }
            }
        }
        true
    }

    /// Stops the engine. Outstanding fetches are abandoned and never complete.
    pub fn stop(&mut self) {
        self.engine.stop();
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn view(&self) -> StoreViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::FetchCatalog { generation } => {
                catalog_info!(
                    "FetchCatalog kind={:?} generation={}",
                    self.state.kind(),
                    generation
                );
                self.engine.fetch_catalog(generation);
            }
        }
    }

    fn apply_event(&mut self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::CatalogFetched { generation, result } => {
                if generation != self.state.generation() {
                    catalog_debug!(
                        "Discarding catalog result from generation {} (current {})",
                        generation,
                        self.state.generation()
                    );
                } else if let Err(err) = &result {
                    catalog_warn!("Catalog fetch failed: {}", err);
                }
                match result {
                    Ok(catalog) => Msg::FetchSucceeded {
                        generation,
                        catalog,
                    },
                    Err(_) => Msg::FetchFailed { generation },
                }
            }
        };
        self.dispatch(msg);
    }
}
