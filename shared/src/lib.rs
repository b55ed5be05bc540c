//! Weight Loss Calculator Shared Library
//!
//! This crate contains the BMI classifier, the multi-rate weight
//! trajectory generator and the request/response types shared by the
//! backend and WASM modules.

pub mod errors;
pub mod format;
pub mod health_metrics;
pub mod trajectory;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use trajectory::*;
pub use types::*;
