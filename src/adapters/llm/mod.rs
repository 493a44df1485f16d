//! Extraction adapters
//!
//! Implementations of the ExtractionPort trait. Currently Google Gemini;
//! other providers slot in alongside.

pub mod gemini;

pub use gemini::GeminiExtractor;
