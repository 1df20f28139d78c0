pub mod bootstrap;
pub mod export;
pub mod fan_out;
pub mod generator;

pub use crate::domain::model::{AnchorElement, IdentifierList, PageSnapshot};
pub use crate::domain::ports::{
    ConfigProvider, Document, ListRenderer, RenderTarget, Storage, Timer,
};
pub use crate::utils::error::Result;
