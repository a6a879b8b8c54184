pub mod config;
pub mod http_probe;
pub mod server;
