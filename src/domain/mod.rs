//! Domain models for StayHub Core

pub mod booking;
pub mod common;
pub mod review;
pub mod room;

pub use booking::*;
pub use common::*;
pub use review::*;
pub use room::*;
