//! Configuration management for luascope

mod settings;

// Re-export main types
pub use settings::ScanConfig;
