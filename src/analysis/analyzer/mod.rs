//! Analyzers that combine a tokenizer and filters.

mod analyzer;
mod pipeline;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
