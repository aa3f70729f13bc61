//! Adapters for the redirect subsystem.
//!
//! This module provides concrete implementations of the redirect ports,
//! following hexagonal architecture principles. Adapters handle all
//! infrastructure concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`http::HttpRedirectSource`]: Production fetch of the remote redirect
//!   list over HTTPS
//! - [`memory::StaticRedirectSource`]: Fixed in-memory list for unit testing
//! - [`memory::FailingRedirectSource`]: Always-failing source for exercising
//!   failure paths
//! - [`reporting::TracingErrorReporter`]: Error reports emitted as
//!   `tracing` events

pub mod http;
pub mod memory;
pub mod reporting;
