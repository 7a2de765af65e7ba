pub mod date_format;
pub mod flash_policy;
pub mod ui_config;
pub mod upload_rules;
