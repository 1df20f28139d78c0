use crate::domain::model::IdentifierList;
use crate::domain::ports::ListRenderer;
use crate::utils::error::{PageError, Result};
use std::fmt;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Idle,
    Running,
    Done,
}

impl fmt::Display for BootState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootState::Idle => "idle",
            BootState::Running => "running",
            BootState::Done => "done",
        };
        f.write_str(name)
    }
}

/// Page-load entry point: runs the concurrent render, then the sequential
/// one, once.
pub struct PageBootstrap<R: ListRenderer> {
    renderer: R,
    ids: IdentifierList,
    state: BootState,
}

impl<R: ListRenderer> PageBootstrap<R> {
    pub fn new(renderer: R, ids: IdentifierList) -> Self {
        Self {
            renderer,
            ids,
            state: BootState::Idle,
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    /// Handles the page-ready signal. Only valid from [`BootState::Idle`];
    /// a failed render leaves the page in [`BootState::Running`].
    pub async fn on_ready(&mut self) -> Result<()> {
        if self.state != BootState::Idle {
            return Err(PageError::InvalidState {
                expected: BootState::Idle.to_string(),
                actual: self.state.to_string(),
            });
        }

        self.state = BootState::Running;
        tracing::info!("🚀 Page ready, rendering {} labels", self.ids.len());
        let started = Instant::now();

        self.renderer.render_concurrently(&self.ids).await?;
        tracing::info!("Concurrent render finished after {:?}", started.elapsed());

        self.renderer.render_sequentially(&self.ids).await?;
        tracing::info!("Sequential render finished after {:?}", started.elapsed());

        self.state = BootState::Done;
        Ok(())
    }
}
