pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod profile;
pub mod schema;
pub mod tables;
pub mod tokens;
pub mod validate;
pub mod writer;
