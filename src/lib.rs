pub mod config;
pub mod logging;
pub mod receipts;
pub mod scoring;
pub mod server;
