pub mod jar;
pub mod repo_server;
