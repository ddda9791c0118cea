pub mod config;
pub mod logging;

pub mod deep_link;
pub mod host_safety;
pub mod retry;
pub mod url_model;
