pub mod analyzer;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod intake;
pub mod interactive;
pub mod render;
