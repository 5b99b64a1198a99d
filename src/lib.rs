//! # World Time Service
//!
//! A small HTTP service that resolves the current time in Ireland
//! (Europe/Dublin) and Ethiopia (Africa/Addis_Ababa) for page rendering.
//!
//! ## Features
//! - Fetches both zones from a third-party world-time API on every request
//! - Falls back to host-clock zone math when the remote is unreachable
//! - Reports the current hour difference between the two zones
//! - Exposes the result as a flat template-context JSON mapping
//! - Health endpoints for deployment probes

/// Configuration management and environment variables
pub mod config;
/// Typed errors for remote time fetches
pub mod error;
/// The timezone resolver and the HTTP context surface
pub mod services;
/// Utility functions for datetime parsing and formatting
pub mod utils;
