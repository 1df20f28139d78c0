use crate::core::fan_out::{join_in_order, spawn_delayed};
use crate::domain::model::{markup_for, AnchorElement, PRIMARY_TARGET, SECONDARY_TARGET};
use crate::domain::ports::{Document, ListRenderer, RenderTarget, Timer};
use crate::utils::error::{PageError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::Instant;

/// Renders punk labels into two containers after a simulated delay per
/// identifier.
///
/// The primary container gets one markup string replacing its content; the
/// secondary container gets structured elements appended one by one and is
/// never cleared.
pub struct DelayedLabelGenerator<D: Document, T: Timer> {
    document: Arc<D>,
    timer: Arc<T>,
    primary_target: String,
    secondary_target: String,
}

impl<D: Document, T: Timer> DelayedLabelGenerator<D, T> {
    pub fn new(document: Arc<D>, timer: T) -> Self {
        Self {
            document,
            timer: Arc::new(timer),
            primary_target: PRIMARY_TARGET.to_string(),
            secondary_target: SECONDARY_TARGET.to_string(),
        }
    }

    pub fn with_targets(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        self.primary_target = primary.into();
        self.secondary_target = secondary.into();
        self
    }

    fn lookup(&self, id: &str) -> Result<D::Target> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::TargetNotFound { id: id.to_string() })
    }
}

#[async_trait]
impl<D: Document, T: Timer> ListRenderer for DelayedLabelGenerator<D, T> {
    async fn render_concurrently(&self, ids: &[u32]) -> Result<()> {
        let container = self.lookup(&self.primary_target)?;
        let container2 = self.lookup(&self.secondary_target)?;
        let started = Instant::now();

        let markup = join_in_order(spawn_delayed(&self.timer, ids, markup_for)).await?;
        container.set_inner_html(markup.concat())?;
        tracing::debug!(
            "Replaced #{} with {} labels",
            container.id(),
            markup.len()
        );

        let elements =
            join_in_order(spawn_delayed(&self.timer, ids, AnchorElement::for_punk)).await?;
        let appended = elements.len();
        for element in elements {
            container2.append_child(element)?;
        }
        tracing::debug!(
            "Appended {} elements to #{} in {:?}",
            appended,
            container2.id(),
            started.elapsed()
        );

        Ok(())
    }

    async fn render_sequentially(&self, ids: &[u32]) -> Result<()> {
        // One full pass over the whole list per identifier, each awaited
        // before the next starts.
        for (cycle, _) in ids.iter().enumerate() {
            tracing::debug!("Sequential pass {}/{}", cycle + 1, ids.len());
            self.render_concurrently(ids).await?;
        }
        Ok(())
    }
}
