pub mod app_context;
pub mod asset_locator;
pub mod components;
pub mod config;
pub mod error;
