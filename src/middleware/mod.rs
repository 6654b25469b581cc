//! HTTP middleware for StayHub Core
//!
//! Provides the JWT authentication extractor used by all routes that
//! mutate bookings or reviews.

pub mod auth;

pub use auth::AuthUser;
