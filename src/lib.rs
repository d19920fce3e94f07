pub mod access;
pub mod config;
pub mod logging;
pub mod retriever;
pub mod url_policy;
