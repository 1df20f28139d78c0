use crate::domain::model::AnchorElement;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> impl Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn ids(&self) -> &[u32];
    fn delay(&self) -> Duration;
    fn primary_target(&self) -> &str;
    fn secondary_target(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn output_formats(&self) -> &[String];
}

/// Completes after the simulated I/O delay for one identifier.
pub trait Timer: Send + Sync + 'static {
    fn sleep(&self, id: u32) -> impl Future<Output = ()> + Send + 'static;
}

/// One output region of the document.
pub trait RenderTarget: Send + Sync {
    fn id(&self) -> &str;
    fn set_inner_html(&self, markup: String) -> Result<()>;
    fn append_child(&self, element: AnchorElement) -> Result<()>;
}

pub trait Document: Send + Sync + 'static {
    type Target: RenderTarget;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Target>;
}

#[async_trait]
pub trait ListRenderer: Send + Sync {
    async fn render_concurrently(&self, ids: &[u32]) -> Result<()>;
    async fn render_sequentially(&self, ids: &[u32]) -> Result<()>;
}
