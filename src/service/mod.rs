//! Business logic layer

pub mod booking;
pub mod review;
pub mod room;

pub use booking::BookingService;
pub use review::ReviewService;
pub use room::RoomService;
