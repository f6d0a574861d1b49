pub mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod jsonl;
pub mod labels;
pub mod report;
pub mod types;

pub use evaluate::{evaluate, Evaluator};
pub use types::scoring::ScoreResult;
