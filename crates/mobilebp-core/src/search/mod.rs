//! Search Module
//!
//! The ranking core:
//! - Tokenization into lower-cased index terms
//! - BM25 term statistics and scoring
//! - Per-dataset search with result projection

mod bm25;
mod dataset;
mod tokenizer;

pub use bm25::{
    inverse_document_frequency, Bm25Config, Bm25Index, ScoredDocument, DEFAULT_B, DEFAULT_K1,
};

pub use dataset::{search_records, DatasetDescriptor, Record};

pub use tokenizer::{tokenize, tokenize_value, MIN_TOKEN_CHARS};
