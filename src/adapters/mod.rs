//! Concrete adapter implementations for ports.

pub mod file_config_adapter;
pub mod json_session_adapter;
pub mod memory_session_adapter;
