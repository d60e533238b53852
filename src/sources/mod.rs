//! Input sources.
pub mod batch;

pub use batch::{Batch, Page};
