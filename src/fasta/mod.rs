// src/fasta/mod.rs
pub mod models;

pub use models::{ExtractionSummary, SelectionCriterion, SequenceEntry};
