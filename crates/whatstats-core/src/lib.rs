pub mod aggregate;
pub mod config;
pub mod error;
pub mod interaction;
pub mod pipeline;
pub mod report;
pub mod words;
