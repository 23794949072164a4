pub mod assumptions;
pub mod config;
pub mod engine;
pub mod output;
pub mod priority;
pub mod server;
