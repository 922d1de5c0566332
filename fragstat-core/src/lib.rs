pub mod analytics;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod source;
