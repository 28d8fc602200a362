pub mod config;
pub mod logging;

pub mod fetch;
pub mod manifest;
pub mod storage;
pub mod url_model;
pub mod walker;
