use crate::adapters::document::InMemoryDocument;
use crate::adapters::storage::LocalStorage;
use crate::adapters::timer::FixedDelay;
use crate::core::bootstrap::{BootState, PageBootstrap};
use crate::core::export::export_snapshot;
use crate::core::generator::DelayedLabelGenerator;
use crate::core::{ConfigProvider, IdentifierList, PageSnapshot};
use crate::utils::error::Result;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PageRun {
    pub state: BootState,
    pub snapshot: PageSnapshot,
    pub written_files: Vec<String>,
}

/// Builds the page from configuration, fires the page-ready signal and
/// exports the resulting document when an output path is set.
pub async fn run_page<C: ConfigProvider>(config: &C) -> Result<PageRun> {
    let document = Arc::new(InMemoryDocument::with_targets(&[
        config.primary_target(),
        config.secondary_target(),
    ]));

    let generator =
        DelayedLabelGenerator::new(Arc::clone(&document), FixedDelay::new(config.delay()))
            .with_targets(config.primary_target(), config.secondary_target());
    let mut bootstrap = PageBootstrap::new(generator, IdentifierList::new(config.ids()));

    bootstrap.on_ready().await?;

    let snapshot = document.snapshot()?;
    let written_files = match config.output_path() {
        Some(path) => {
            tracing::debug!("Exporting page snapshot to {}", path);
            let storage = LocalStorage::new(path);
            export_snapshot(&storage, &snapshot, config.output_formats()).await?
        }
        None => Vec::new(),
    };

    Ok(PageRun {
        state: bootstrap.state(),
        snapshot,
        written_files,
    })
}
