//! BM25 Ranking Index
//!
//! Term statistics over a fixed document set, scored against free-text queries:
//!
//! ```text
//! score(q, d) = Σ IDF(t) * (TF(t,d) * (k1 + 1)) / (TF(t,d) + k1 * (1 - b + b * |d|/avgdl))
//! IDF(t)      = ln((N - df(t) + 0.5) / (df(t) + 0.5) + 1)
//! ```
//!
//! An index is built for one document set and thrown away afterwards. N and
//! IDF mean nothing outside the set they were computed from, so nothing here
//! is cached across builds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::tokenizer::tokenize;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default term frequency saturation
pub const DEFAULT_K1: f64 = 1.5;

/// Default length normalization
pub const DEFAULT_B: f64 = 0.75;

/// BM25 scoring parameters, fixed for the lifetime of an index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Config {
    /// Term frequency saturation (higher = repeated terms keep adding weight)
    pub k1: f64,
    /// Length normalization (0.0 = none, 1.0 = full)
    pub b: f64,
}

impl Default for Bm25Config {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
        }
    }
}

// ============================================================================
// TYPES
// ============================================================================

/// A document position paired with its BM25 score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    /// Position of the document in the input set
    pub index: usize,
    /// BM25 score (0.0 when no query term occurs in the document)
    pub score: f64,
}

/// Term statistics for one document set
#[derive(Debug, Clone)]
pub struct Bm25Index {
    config: Bm25Config,
    /// Raw term counts, one map per document
    term_freqs: Vec<HashMap<String, u32>>,
    /// Token count per document
    doc_lengths: Vec<usize>,
    avg_doc_len: f64,
    /// Number of documents containing each term at least once
    doc_freqs: HashMap<String, usize>,
    idf: HashMap<String, f64>,
}

// ============================================================================
// INDEX
// ============================================================================

impl Bm25Index {
    /// Build an index over `documents`, tokenizing each independently
    ///
    /// An empty document set gives a degenerate index that scores nothing.
    pub fn build<I, S>(documents: I, config: Bm25Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut term_freqs = Vec::new();
        let mut doc_lengths = Vec::new();
        let mut doc_freqs: HashMap<String, usize> = HashMap::new();

        for document in documents {
            let tokens = tokenize(document.as_ref());
            doc_lengths.push(tokens.len());

            let mut counts: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *counts.entry(token).or_default() += 1;
            }
            // Each distinct term counts once per document
            for term in counts.keys() {
                *doc_freqs.entry(term.clone()).or_default() += 1;
            }
            term_freqs.push(counts);
        }

        let num_docs = term_freqs.len();
        let avg_doc_len = if num_docs > 0 {
            doc_lengths.iter().sum::<usize>() as f64 / num_docs as f64
        } else {
            0.0
        };

        let idf = doc_freqs
            .iter()
            .map(|(term, &df)| (term.clone(), inverse_document_frequency(num_docs, df)))
            .collect();

        tracing::debug!(
            documents = num_docs,
            vocabulary = doc_freqs.len(),
            avg_doc_len,
            "Built BM25 index"
        );

        Self {
            config,
            term_freqs,
            doc_lengths,
            avg_doc_len,
            doc_freqs,
            idf,
        }
    }

    /// Number of indexed documents (N)
    pub fn len(&self) -> usize {
        self.term_freqs.len()
    }

    /// True when built from zero documents
    pub fn is_empty(&self) -> bool {
        self.term_freqs.is_empty()
    }

    /// Parameters this index scores with
    pub fn config(&self) -> Bm25Config {
        self.config
    }

    /// Mean token count across documents (0.0 for an empty index)
    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    /// Token count of one document
    pub fn doc_len(&self, index: usize) -> Option<usize> {
        self.doc_lengths.get(index).copied()
    }

    /// Number of distinct indexed terms
    pub fn vocabulary_size(&self) -> usize {
        self.doc_freqs.len()
    }

    /// Document frequency of a term (0 when out of vocabulary)
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    /// IDF of a term, `None` when out of vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Score every document against `query`
    ///
    /// Returns one entry per document, highest score first. Equal scores keep
    /// input order. Zero-scoring documents stay in the list; dropping them is
    /// up to the caller. Out-of-vocabulary query terms contribute nothing, and
    /// a repeated query term contributes once per occurrence.
    pub fn score(&self, query: &str) -> Vec<ScoredDocument> {
        let query_tokens = tokenize(query);

        let mut scored: Vec<ScoredDocument> = self
            .term_freqs
            .iter()
            .enumerate()
            .map(|(index, freqs)| ScoredDocument {
                index,
                score: self.score_document(&query_tokens, freqs, self.doc_lengths[index]),
            })
            .collect();

        // Stable sort: ties stay in document order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    fn score_document(&self, query_tokens: &[String], freqs: &HashMap<String, u32>, doc_len: usize) -> f64 {
        let Bm25Config { k1, b } = self.config;
        let length_ratio = if self.avg_doc_len > 0.0 {
            doc_len as f64 / self.avg_doc_len
        } else {
            0.0
        };

        let mut score = 0.0;
        for token in query_tokens {
            let Some(&idf) = self.idf.get(token) else {
                continue;
            };
            let tf = freqs.get(token).copied().unwrap_or(0) as f64;
            if tf == 0.0 {
                continue;
            }
            let numerator = tf * (k1 + 1.0);
            let denominator = tf + k1 * (1.0 - b + b * length_ratio);
            score += idf * numerator / denominator;
        }
        score
    }
}

/// Robertson-Sparck Jones IDF with the +1 inside the logarithm
#[inline]
pub fn inverse_document_frequency(num_docs: usize, doc_freq: usize) -> f64 {
    let n = num_docs as f64;
    let df = doc_freq as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}
