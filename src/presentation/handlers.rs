// HTTP request handlers
use crate::application::fleet_service::NewVehicle;
use crate::domain::booking::{Booking, Feedback, Generated};
use crate::domain::dashboard::{HomePage, ProfitMetrics, RentalPriceRow, VehicleForm};
use crate::domain::error::FleetError;
use crate::domain::vehicle::VehicleRecord;
use crate::infrastructure::http_response::created;
use crate::presentation::app_state::AppState;
use axum::{extract::State, response::Response, Json};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn home(State(state): State<Arc<AppState>>) -> Json<HomePage> {
    Json(HomePage::new(state.placeholder_image.clone()))
}

/// Full ledger, derived columns included
pub async fn inventory(State(state): State<Arc<AppState>>) -> Json<Vec<VehicleRecord>> {
    Json(state.fleet_service.inventory())
}

pub async fn rental_prices(State(state): State<Arc<AppState>>) -> Json<Vec<RentalPriceRow>> {
    Json(state.fleet_service.rental_prices())
}

pub async fn profit_metrics(State(state): State<Arc<AppState>>) -> Json<ProfitMetrics> {
    Json(state.fleet_service.profit_metrics())
}

/// Fresh synthetic bookings over the current fleet
pub async fn bookings(State(state): State<Arc<AppState>>) -> Json<Generated<Booking>> {
    let vehicles = state.fleet_service.vehicle_names();
    Json(Generated::now(state.demo_data.bookings(&vehicles)))
}

pub async fn feedback(State(state): State<Arc<AppState>>) -> Json<Generated<Feedback>> {
    let vehicles = state.fleet_service.vehicle_names();
    Json(Generated::now(state.demo_data.feedback(&vehicles)))
}

pub async fn vehicle_form(State(state): State<Arc<AppState>>) -> Json<VehicleForm> {
    Json(state.fleet_service.vehicle_form())
}

/// Add-vehicle form submission
pub async fn add_vehicle(
    State(state): State<Arc<AppState>>,
    Json(vehicle): Json<NewVehicle>,
) -> Result<Response, FleetError> {
    let record = state.fleet_service.add_vehicle(vehicle)?;
    Ok(created(record))
}
