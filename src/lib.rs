pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod server;
#[cfg(test)]
mod test_utils;
