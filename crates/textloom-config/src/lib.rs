//! Run configuration for the codegen driver.
//!
//! The driver loads a TOML configuration describing where input documents
//! live and which extra inflection rules apply, hands the document patterns
//! to `textloom-discover`, and writes rendered output through the atomic
//! helpers here.

pub mod atomic;
pub mod config;

pub use atomic::{WriteOutcome, write_bytes_atomic, write_generated_file};
pub use config::{
    CodegenConfig, ConfigError, ConfigResult, DocumentSearch, InflectionSettings,
    load_or_create_config, save_config, validate_config,
};
