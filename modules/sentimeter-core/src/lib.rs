pub mod basic;
pub mod error;
pub mod lexicon;
pub mod overrides;
pub mod score;
pub mod tokenize;
pub mod types;

pub use error::{Result, SentimeterError};
pub use score::{analyze, analyze_guarded};
pub use tokenize::tokenize;
pub use types::{SentimentLabel, SentimentResult};
