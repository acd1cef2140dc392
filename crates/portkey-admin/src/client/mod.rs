//! Portkey Admin API client and configuration.
//!
//! This module provides the core client for the Portkey Admin REST API,
//! including configuration and the shared request primitive.

pub use self::admin_client::AdminClient;
pub use self::admin_config::{AdminBuilder, AdminBuilderError, AdminConfig};

pub mod admin_client;
pub mod admin_config;
