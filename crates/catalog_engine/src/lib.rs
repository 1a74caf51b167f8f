//! Catalog engine: remote course fetching and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{
    fetch_courses_and_categories, FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_ENDPOINT,
};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
