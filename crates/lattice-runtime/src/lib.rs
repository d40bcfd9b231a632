#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod definition;
mod error;
pub mod service;
pub mod store;
pub mod synth;
pub mod template;

pub use error::{WorkflowError, WorkflowResult};

/// Tracing target for runtime operations.
pub const TRACING_TARGET: &str = "lattice_runtime";
