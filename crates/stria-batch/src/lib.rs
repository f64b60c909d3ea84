//! Batch orchestration for the Stria barcode engine.
//!
//! This crate provides the batch service consumed by the UI layer: random
//! generation by count and literal generation from user content, with the
//! replace/prepend semantics the result list expects. Core types are
//! re-exported from `stria_core`.

pub mod batch;
pub mod error;
pub mod service;

pub use batch::CodeBatch;
pub use error::BatchError;
pub use service::{BatchService, MAX_BATCH};
