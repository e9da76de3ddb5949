// src/extractors/mod.rs
pub mod fasta;

pub use fasta::FastaExtractor;
