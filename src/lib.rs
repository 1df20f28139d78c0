pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{document::InMemoryDocument, storage::LocalStorage, timer::FixedDelay};
pub use app::{run_page, PageRun};
pub use config::toml_config::TomlConfig;
pub use crate::core::{bootstrap::PageBootstrap, generator::DelayedLabelGenerator};
pub use utils::error::{PageError, Result};
