pub mod config;
pub mod context;
pub mod enhance;
pub mod generation;
pub mod highlights;
pub mod llm;
pub mod metrics;
pub mod model;
pub mod narrator;
pub mod parser;
pub mod prompt;
pub mod retry;
pub mod story;
pub mod title;
