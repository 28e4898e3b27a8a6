// Fleet service - Use cases for reading and extending the fleet ledger
use crate::domain::dashboard::{rental_prices, FormField, ProfitMetrics, RentalPriceRow, VehicleForm};
use crate::domain::error::FleetError;
use crate::domain::fleet::FleetLedger;
use crate::domain::vehicle::{HourlyRates, VehicleRecord, VehicleType};
use serde::Deserialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const MIN_CAPACITY: u32 = 1;
pub const MIN_PRICE_PER_HOUR: f64 = 50.0;
pub const MIN_FUEL_COST_PER_HOUR: f64 = 5.0;
pub const MIN_MAINTENANCE_COST_PER_HOUR: f64 = 5.0;

/// Add-vehicle form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct NewVehicle {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub capacity: u32,
    pub price_per_hour: f64,
    pub fuel_cost_per_hour: f64,
    pub maintenance_cost_per_hour: f64,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewVehicle {
    /// Raise every numeric field to its form minimum. NaN counts as missing.
    /// Returns the names of the fields that were adjusted.
    fn clamp_to_minimums(&mut self) -> Result<Vec<&'static str>, FleetError> {
        let mut adjusted = Vec::new();

        if self.capacity < MIN_CAPACITY {
            self.capacity = MIN_CAPACITY;
            adjusted.push("capacity");
        }
        for (field, value, minimum) in [
            ("price_per_hour", &mut self.price_per_hour, MIN_PRICE_PER_HOUR),
            ("fuel_cost_per_hour", &mut self.fuel_cost_per_hour, MIN_FUEL_COST_PER_HOUR),
            (
                "maintenance_cost_per_hour",
                &mut self.maintenance_cost_per_hour,
                MIN_MAINTENANCE_COST_PER_HOUR,
            ),
        ] {
            if value.is_infinite() {
                return Err(FleetError::NonFinite { field });
            }
            // NaN fails the comparison too
            if !(*value >= minimum) {
                *value = minimum;
                adjusted.push(field);
            }
        }

        Ok(adjusted)
    }
}

/// Sole owner of the running process's ledger.
#[derive(Clone)]
pub struct FleetService {
    ledger: Arc<Mutex<FleetLedger>>,
    placeholder_image: String,
}

impl FleetService {
    pub fn new(ledger: FleetLedger, placeholder_image: String) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            placeholder_image,
        }
    }

    fn ledger(&self) -> MutexGuard<'_, FleetLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn inventory(&self) -> Vec<VehicleRecord> {
        self.ledger().records().to_vec()
    }

    pub fn vehicle_names(&self) -> Vec<String> {
        self.ledger().names()
    }

    pub fn rental_prices(&self) -> Vec<RentalPriceRow> {
        rental_prices(&self.ledger())
    }

    pub fn profit_metrics(&self) -> ProfitMetrics {
        ProfitMetrics::from_ledger(&self.ledger())
    }

    /// Fields and minimums of the add-vehicle form.
    pub fn vehicle_form(&self) -> VehicleForm {
        VehicleForm::new(vec![
            FormField::text("name", "Vehicle Name"),
            FormField::choice(
                "type",
                "Vehicle Type",
                vec![VehicleType::Sprinter, VehicleType::PartyBus],
            ),
            FormField::number("capacity", "Seating Capacity", f64::from(MIN_CAPACITY), 1.0),
            FormField::number("price_per_hour", "Price per Hour ($)", MIN_PRICE_PER_HOUR, 10.0),
            FormField::number(
                "fuel_cost_per_hour",
                "Fuel Cost per Hour ($)",
                MIN_FUEL_COST_PER_HOUR,
                5.0,
            ),
            FormField::number(
                "maintenance_cost_per_hour",
                "Maintenance Cost per Hour ($)",
                MIN_MAINTENANCE_COST_PER_HOUR,
                5.0,
            ),
        ])
    }

    pub fn add_vehicle(&self, mut vehicle: NewVehicle) -> Result<VehicleRecord, FleetError> {
        match vehicle.clamp_to_minimums() {
            Ok(adjusted) if !adjusted.is_empty() => {
                tracing::warn!(
                    "Raised {:?} to form minimums for vehicle {:?}",
                    adjusted,
                    vehicle.name
                );
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Rejected vehicle {:?}: {}", vehicle.name, e);
                return Err(e);
            }
        }

        let image = vehicle
            .image
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| self.placeholder_image.clone());
        let record = VehicleRecord::new(
            vehicle.name,
            vehicle.vehicle_type,
            vehicle.capacity,
            HourlyRates {
                price: vehicle.price_per_hour,
                fuel: vehicle.fuel_cost_per_hour,
                maintenance: vehicle.maintenance_cost_per_hour,
            },
            image,
        );

        let mut ledger = self.ledger();
        ledger.append(record.clone());
        tracing::info!(
            "Added vehicle {:?} ({}), daily profit {:.2}, fleet size {}",
            record.name(),
            record.vehicle_type(),
            record.daily().profit,
            ledger.len()
        );

        Ok(record)
    }
}
