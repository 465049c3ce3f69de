pub mod api;
pub mod cli;
pub mod config;
pub mod dirs;
pub mod error;
pub mod router;
pub mod server;
