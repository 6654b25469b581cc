//! Application state trait for dependency injection
//!
//! Handlers are generic over this trait, so the same handler code serves
//! both the production `AppState` and in-memory test implementations.

use crate::config::Config;
use crate::jwt::JwtManager;
use crate::repository::{BookingRepository, ReviewRepository, RoomRepository};
use crate::service::{BookingService, ReviewService, RoomService};

/// Trait for application state that provides access to all services.
pub trait HasServices: Clone + Send + Sync + 'static {
    /// The room repository type
    type RoomRepo: RoomRepository;
    /// The booking repository type
    type BookingRepo: BookingRepository;
    /// The review repository type
    type ReviewRepo: ReviewRepository;

    /// Get the application configuration
    fn config(&self) -> &Config;

    /// Get the room query service
    fn room_service(&self) -> &RoomService<Self::RoomRepo>;

    /// Get the booking service
    fn booking_service(&self) -> &BookingService<Self::BookingRepo>;

    /// Get the review service
    fn review_service(&self) -> &ReviewService<Self::ReviewRepo, Self::BookingRepo>;

    /// Get the JWT manager
    fn jwt_manager(&self) -> &JwtManager;

    /// Check if the system is ready (store is reachable)
    fn check_ready(&self) -> impl std::future::Future<Output = bool> + Send;
}
