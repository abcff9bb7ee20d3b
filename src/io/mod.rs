//! I/O modules for timeline loading.

pub mod async_loader;

pub use async_loader::{AsyncLoader, LoadResult};
