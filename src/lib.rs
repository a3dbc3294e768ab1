pub mod config;
pub mod discovery;
pub mod duplicates;
pub mod engine;
pub mod error;
pub mod extract;
pub mod locate;
pub mod preprocess;
pub mod reporting;
pub mod similarity;
pub mod tokenize;
pub mod types;
