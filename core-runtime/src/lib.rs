//! # Core Runtime Module
//!
//! Provides the ambient infrastructure the capability dispatcher depends on:
//! - Logging and tracing infrastructure
//! - Dispatch configuration (environment signals plus host SDK handles)
//! - Shared error type
//!
//! ## Overview
//!
//! Hosts build a [`DispatchConfig`](config::DispatchConfig) once at startup,
//! optionally call [`init_logging`](logging::init_logging), and hand the
//! config to `core-dispatch`. Nothing in this crate reads ambient globals.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{DispatchConfig, DispatchConfigBuilder, HostSdks};
pub use error::{Error, Result};
