pub mod page;

pub use page::{run_page, PageRun};
