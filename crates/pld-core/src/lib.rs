pub mod config;
pub mod logging;

pub mod artifact;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod install;
pub mod manifest;
pub mod output;
pub mod resolve;
pub mod tags;
