// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_vehicle, bookings, feedback, health_check, home, inventory, profit_metrics, rental_prices,
    vehicle_form,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(home))
        .route("/inventory", get(inventory))
        .route("/rental-prices", get(rental_prices))
        .route("/profit-metrics", get(profit_metrics))
        .route("/bookings", get(bookings))
        .route("/feedback", get(feedback))
        .route("/vehicles", get(vehicle_form).post(add_vehicle))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
