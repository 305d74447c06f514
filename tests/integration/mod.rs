//! Integration tests for the reminisce question engine

mod cli_binary;
mod config_integration;
mod translation_fallback;
