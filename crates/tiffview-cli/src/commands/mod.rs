pub mod config;
pub mod info;
