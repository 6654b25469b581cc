//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::jwt::JwtManager;
use crate::repository::{
    booking::BookingRepositoryImpl, review::ReviewRepositoryImpl, room::RoomRepositoryImpl,
};
use crate::service::{BookingService, ReviewService, RoomService};
use crate::state::HasServices;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use mongodb::bson::doc;
use mongodb::{Client, Database};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub room_service: Arc<RoomService<RoomRepositoryImpl>>,
    pub booking_service: Arc<BookingService<BookingRepositoryImpl>>,
    pub review_service: Arc<ReviewService<ReviewRepositoryImpl, BookingRepositoryImpl>>,
    pub jwt_manager: JwtManager,
}

/// Implement HasServices trait for production AppState
impl HasServices for AppState {
    type RoomRepo = RoomRepositoryImpl;
    type BookingRepo = BookingRepositoryImpl;
    type ReviewRepo = ReviewRepositoryImpl;

    fn config(&self) -> &Config {
        &self.config
    }

    fn room_service(&self) -> &RoomService<Self::RoomRepo> {
        &self.room_service
    }

    fn booking_service(&self) -> &BookingService<Self::BookingRepo> {
        &self.booking_service
    }

    fn review_service(&self) -> &ReviewService<Self::ReviewRepo, Self::BookingRepo> {
        &self.review_service
    }

    fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    async fn check_ready(&self) -> bool {
        self.db.run_command(doc! { "ping": 1 }).await.is_ok()
    }
}

/// Run the server
pub async fn run(config: Config) -> Result<()> {
    // Connect to the document store
    let client = Client::with_uri_str(&config.database.url).await?;
    let db = client.database(&config.database.name);

    info!("Connected to database");

    // Create repositories
    let room_repo = Arc::new(RoomRepositoryImpl::new(db.clone()));
    let booking_repo = Arc::new(BookingRepositoryImpl::new(db.clone()));
    let review_repo = Arc::new(ReviewRepositoryImpl::new(db.clone()));

    // Create JWT manager
    let jwt_manager = JwtManager::new(config.jwt.clone());

    // Create services
    let room_service = Arc::new(RoomService::new(room_repo));
    let booking_service = Arc::new(BookingService::new(booking_repo.clone()));
    let review_service = Arc::new(ReviewService::new(review_repo, booking_repo));

    // Create app state
    let state = AppState {
        config: Arc::new(config.clone()),
        db,
        room_service,
        booking_service,
        review_service,
        jwt_manager,
    };

    let app = build_router(state);

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the HTTP router with generic state type
///
/// This function is generic over the state type, allowing it to work with
/// both production `AppState` and test implementations that implement
/// `HasServices`.
pub fn build_router<S: HasServices>(state: S) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Service metadata and health endpoints
        .route("/", get(api::health::index))
        .route("/health", get(api::health::health))
        .route("/ready", get(api::health::ready::<S>))
        // Room endpoints (public reads)
        .route("/api/rooms", get(api::room::list::<S>))
        .route(
            "/api/rooms/price-range",
            get(api::room::list_by_price_range::<S>),
        )
        .route("/api/rooms/top-rated", get(api::room::top_rated::<S>))
        .route("/api/room/{id}", get(api::room::detail::<S>))
        // Booking endpoints (bearer-gated). GET reads the path segment as
        // the owner email; PUT/DELETE read it as a booking id.
        .route("/api/book-room", post(api::booking::create::<S>))
        .route(
            "/api/bookings/{id}",
            get(api::booking::list_for_owner::<S>)
                .put(api::booking::update::<S>)
                .delete(api::booking::remove::<S>),
        )
        // Review endpoints
        .route("/api/review", post(api::review::create::<S>))
        .route("/api/reviews/{id}", get(api::review::list_for_room::<S>))
        .route("/api/reviews", get(api::review::list_all::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
