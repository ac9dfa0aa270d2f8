//! # tn-core
//!
//! Core types, traits, and error definitions for the text normalization engine.
//!
//! This crate provides the foundational abstractions shared by the engine and
//! its front ends:
//!
//! - Boundary types (`NormalizeRequest`, `NormalizationResult`, `TraceEntry`)
//! - The `TextNormalizer` trait
//! - Unified error handling via `NormError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{EngineConfig, LoggingConfig};
pub use error::{NormError, NormResult};
pub use traits::TextNormalizer;
pub use types::{ErrorResponse, NormalizationResult, NormalizeRequest, TraceEntry};
