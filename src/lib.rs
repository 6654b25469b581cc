//! StayHub Core - Hotel Room Booking Service Backend
//!
//! This crate provides the backend for the StayHub room booking service:
//! a REST API over a MongoDB document store, with bearer-token
//! authentication gating all booking and review writes.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod policy;
pub mod repository;
pub mod server;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
