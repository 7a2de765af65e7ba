pub mod config;
pub mod dates;
pub mod flash;
pub mod prompt;
pub mod upload;
