#![forbid(unsafe_code)]

//! Core domain model and conversion logic for the uconv unit converter.
//!
//! This crate provides:
//! - Domain types (categories, conversions, domain rules)
//! - The built-in conversion catalog
//! - Input parsing, validation and result formatting
//! - Presentation state shared by the front ends
//! - Configuration and logging

pub mod types;
pub mod error;
pub mod transforms;
pub mod registry;
pub mod catalog;
pub mod state;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{ConvertError, Error, Result, Severity};
pub use types::*;
pub use registry::{parse_value, Registry};
pub use catalog::{build_default_registry, get_default_registry};
pub use state::{ConverterState, NO_RESULT};
pub use config::Config;
