//! Text analysis.
//!
//! - **Tokenizer**: lowercases text and splits it into word tokens
//! - **Stopwords**: the set of tokens dropped from frequency results

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordSet;
pub use tokenizer::{tokenize, Field, Tokenizer, Tokens};
