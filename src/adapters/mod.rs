// Adapters layer: concrete implementations of the domain ports.

pub mod document;
pub mod storage;
pub mod timer;
