//! Review endpoint tests: creation side effect, listings, end-to-end flow

use super::{
    build_test_router, get_json, get_json_auth, post_json, TestAppState,
};
use crate::api::create_token;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

fn review_payload(room_id: &str, booking_id: &str, email: &str, rating: f64) -> serde_json::Value {
    json!({
        "roomId": room_id,
        "bookingId": booking_id,
        "userEmail": email,
        "rating": rating,
        "date": "2024-01-05T12:00:00Z",
    })
}

#[tokio::test]
async fn test_add_review_requires_token() {
    let state = TestAppState::new();
    let app = build_test_router(state);

    let (status, _) = post_json(
        &app,
        "/api/review",
        None,
        &review_payload(
            "507f1f77bcf86cd799439011",
            "507f191e810c19729de860ea",
            "a@x.com",
            5.0,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_review_mismatched_email_forbidden() {
    let state = TestAppState::new();
    let store = state.store.clone();
    let app = build_test_router(state);

    let token = create_token("b@x.com");
    let (status, _) = post_json(
        &app,
        "/api/review",
        Some(&token),
        &review_payload(
            "507f1f77bcf86cd799439011",
            "507f191e810c19729de860ea",
            "a@x.com",
            5.0,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(store.reviews.read().await.is_empty());
}

#[tokio::test]
async fn test_add_review_marks_booking_reviewed() {
    let state = TestAppState::new();
    let store = state.store.clone();
    let room_id = store.seed_room("Deluxe Suite", 150.0).await;
    let booking_id = store.seed_booking(&room_id, "a@x.com", "2024-01-01").await;
    let app = build_test_router(state);

    let token = create_token("a@x.com");
    let (status, body) = post_json(
        &app,
        "/api/review",
        Some(&token),
        &review_payload(&room_id, &booking_id, "a@x.com", 5.0),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert!(body["reviewId"].is_string());

    let bookings = store.bookings.read().await;
    assert!(bookings[0].reviewed);
}

#[tokio::test]
async fn test_add_review_survives_dangling_booking_reference() {
    let state = TestAppState::new();
    let store = state.store.clone();
    let room_id = store.seed_room("Deluxe Suite", 150.0).await;
    let app = build_test_router(state);

    // Booking id parses but matches nothing; the flag update is
    // best-effort, so the review is still created.
    let token = create_token("a@x.com");
    let (status, _) = post_json(
        &app,
        "/api/review",
        Some(&token),
        &review_payload(&room_id, "507f191e810c19729de860ea", "a@x.com", 4.0),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.reviews.read().await.len(), 1);
}

#[tokio::test]
async fn test_list_reviews_for_room_filters_by_room() {
    let state = TestAppState::new();
    let store = state.store.clone();
    let room_a = store.seed_room("Room A", 80.0).await;
    let room_b = store.seed_room("Room B", 90.0).await;
    let booking_id = store.seed_booking(&room_a, "a@x.com", "2024-01-01").await;
    store
        .seed_review(&room_a, &booking_id, "a@x.com", 4.0, "2024-01-05")
        .await;
    store
        .seed_review(&room_b, &booking_id, "a@x.com", 5.0, "2024-01-06")
        .await;
    let app = build_test_router(state);

    let (status, body) = get_json(&app, &format!("/api/reviews/{}", room_a)).await;
    assert_eq!(status, StatusCode::OK);

    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["roomId"], room_a.as_str());
}

#[tokio::test]
async fn test_list_reviews_for_room_malformed_id() {
    let state = TestAppState::new();
    let app = build_test_router(state);

    let (status, _) = get_json(&app, "/api/reviews/not-an-id").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_all_reviews_sorted_by_date_descending() {
    let state = TestAppState::new();
    let store = state.store.clone();
    let room_id = store.seed_room("Room A", 80.0).await;
    let booking_id = store.seed_booking(&room_id, "a@x.com", "2024-01-01").await;
    store
        .seed_review(&room_id, &booking_id, "a@x.com", 4.0, "2024-01-05")
        .await;
    store
        .seed_review(&room_id, &booking_id, "b@x.com", 5.0, "2024-02-05")
        .await;
    store
        .seed_review(&room_id, &booking_id, "c@x.com", 3.0, "2024-01-20")
        .await;
    let app = build_test_router(state);

    let (status, body) = get_json(&app, "/api/reviews").await;
    assert_eq!(status, StatusCode::OK);

    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0]["date"], "2024-02-05");
    assert_eq!(reviews[1]["date"], "2024-01-20");
    assert_eq!(reviews[2]["date"], "2024-01-05");
}

#[tokio::test]
async fn test_booking_review_end_to_end() {
    let state = TestAppState::new();
    let store = state.store.clone();
    let room_id = store.seed_room("Garden View", 120.0).await;
    let app = build_test_router(state);

    let token = create_token("a@x.com");

    // Book the room.
    let (status, body) = post_json(
        &app,
        "/api/book-room",
        Some(&token),
        &json!({
            "roomId": room_id,
            "userEmail": "a@x.com",
            "bookingDate": "2024-01-01",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let booking_id = body["bookingId"].as_str().unwrap().to_string();

    // The booking shows up with its room joined, unreviewed.
    let (status, body) = get_json_auth(&app, "/api/bookings/a@x.com", &token).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["_id"], booking_id.as_str());
    assert_eq!(bookings[0]["reviewed"], false);
    assert_eq!(bookings[0]["roomDetails"][0]["name"], "Garden View");

    // Review the stay.
    let (status, _) = post_json(
        &app,
        "/api/review",
        Some(&token),
        &review_payload(&room_id, &booking_id, "a@x.com", 5.0),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // The booking now reads as reviewed, and the room's average reflects
    // the new rating.
    let (_, body) = get_json_auth(&app, "/api/bookings/a@x.com", &token).await;
    assert_eq!(body.as_array().unwrap()[0]["reviewed"], true);

    let (_, body) = get_json(&app, "/api/rooms").await;
    let average = body.as_array().unwrap()[0]["averageRating"].as_f64().unwrap();
    assert!((average - 5.0).abs() < f64::EPSILON);
}
