use crate::domain::model::{AnchorElement, PageSnapshot, TargetSnapshot};
use crate::domain::ports::{Document, RenderTarget};
use crate::utils::error::{PageError, Result};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
enum Node {
    Html(String),
    Element(AnchorElement),
}

#[derive(Debug, Default)]
struct Region {
    nodes: Vec<Node>,
}

impl Region {
    fn inner_html(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Html(markup) => markup.clone(),
                Node::Element(element) => element.to_string(),
            })
            .collect()
    }

    fn elements(&self) -> Vec<AnchorElement> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element.clone()),
                Node::Html(_) => None,
            })
            .collect()
    }
}

/// Handle to one region of an [`InMemoryDocument`].
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    region: Arc<Mutex<Region>>,
}

impl Container {
    fn lock(&self) -> Result<MutexGuard<'_, Region>> {
        self.region.lock().map_err(|_| PageError::RenderError {
            message: format!("container #{} is poisoned", self.id),
        })
    }
}

impl RenderTarget for Container {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_inner_html(&self, markup: String) -> Result<()> {
        let mut region = self.lock()?;
        region.nodes.clear();
        if !markup.is_empty() {
            region.nodes.push(Node::Html(markup));
        }
        Ok(())
    }

    fn append_child(&self, element: AnchorElement) -> Result<()> {
        self.lock()?.nodes.push(Node::Element(element));
        Ok(())
    }
}

/// Document with a fixed set of named regions, declared up front the way a
/// static page declares its containers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    regions: Vec<(String, Arc<Mutex<Region>>)>,
}

impl InMemoryDocument {
    pub fn with_targets(ids: &[&str]) -> Self {
        Self {
            regions: ids
                .iter()
                .map(|id| (id.to_string(), Arc::new(Mutex::new(Region::default()))))
                .collect(),
        }
    }

    fn region(&self, id: &str) -> Option<&Arc<Mutex<Region>>> {
        self.regions
            .iter()
            .find(|(region_id, _)| region_id == id)
            .map(|(_, region)| region)
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        let region = self.region(id)?.lock().ok()?;
        Some(region.inner_html())
    }

    /// Structured children appended to the region, in append order.
    pub fn children(&self, id: &str) -> Option<Vec<AnchorElement>> {
        let region = self.region(id)?.lock().ok()?;
        Some(region.elements())
    }

    pub fn snapshot(&self) -> Result<PageSnapshot> {
        let mut targets = Vec::with_capacity(self.regions.len());
        for (id, region) in &self.regions {
            let region = region.lock().map_err(|_| PageError::RenderError {
                message: format!("container #{} is poisoned", id),
            })?;
            targets.push(TargetSnapshot {
                id: id.clone(),
                inner_html: region.inner_html(),
                child_count: region.elements().len(),
            });
        }

        Ok(PageSnapshot {
            generated_at: Utc::now(),
            targets,
        })
    }
}

impl Document for InMemoryDocument {
    type Target = Container;

    fn get_element_by_id(&self, id: &str) -> Option<Container> {
        self.region(id).map(|region| Container {
            id: id.to_string(),
            region: Arc::clone(region),
        })
    }
}
