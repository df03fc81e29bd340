//! Application service layer - config, catalog, quoting, export

pub mod catalog;
pub mod config;
pub mod export;
pub mod quote_service;
