// Vehicle domain model
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of one operating day, in billable hours.
pub const HOURS_PER_DAY: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Sprinter,
    #[serde(rename = "Party Bus", alias = "PartyBus")]
    PartyBus,
}

impl VehicleType {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Sprinter => "Sprinter",
            VehicleType::PartyBus => "Party Bus",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hourly rates a vehicle is billed and costed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRates {
    pub price: f64,
    pub fuel: f64,
    pub maintenance: f64,
}

/// Daily figures derived from [`HourlyRates`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyFinancials {
    pub revenue: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub profit: f64,
}

/// Derive the daily figures for one vehicle over a fixed operating day.
pub fn derive(price: f64, fuel: f64, maintenance: f64) -> DailyFinancials {
    let revenue = price * HOURS_PER_DAY;
    let fuel_cost = fuel * HOURS_PER_DAY;
    let maintenance_cost = maintenance * HOURS_PER_DAY;

    DailyFinancials {
        revenue,
        fuel_cost,
        maintenance_cost,
        profit: revenue - fuel_cost - maintenance_cost,
    }
}

/// One row of the fleet.
///
/// Rates are private so the derived figures can only change together with
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecord {
    name: String,
    #[serde(rename = "type")]
    vehicle_type: VehicleType,
    capacity: u32,
    price_per_hour: f64,
    fuel_cost_per_hour: f64,
    maintenance_cost_per_hour: f64,
    image: String,
    daily_revenue: f64,
    daily_fuel_cost: f64,
    daily_maintenance_cost: f64,
    daily_profit: f64,
}

impl VehicleRecord {
    pub fn new(
        name: String,
        vehicle_type: VehicleType,
        capacity: u32,
        rates: HourlyRates,
        image: String,
    ) -> Self {
        let mut record = Self {
            name,
            vehicle_type,
            capacity,
            price_per_hour: rates.price,
            fuel_cost_per_hour: rates.fuel,
            maintenance_cost_per_hour: rates.maintenance,
            image,
            daily_revenue: 0.0,
            daily_fuel_cost: 0.0,
            daily_maintenance_cost: 0.0,
            daily_profit: 0.0,
        };
        record.rederive();
        record
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn rates(&self) -> HourlyRates {
        HourlyRates {
            price: self.price_per_hour,
            fuel: self.fuel_cost_per_hour,
            maintenance: self.maintenance_cost_per_hour,
        }
    }

    pub fn daily(&self) -> DailyFinancials {
        DailyFinancials {
            revenue: self.daily_revenue,
            fuel_cost: self.daily_fuel_cost,
            maintenance_cost: self.daily_maintenance_cost,
            profit: self.daily_profit,
        }
    }

    #[cfg(test)]
    pub fn set_rates(&mut self, rates: HourlyRates) {
        self.price_per_hour = rates.price;
        self.fuel_cost_per_hour = rates.fuel;
        self.maintenance_cost_per_hour = rates.maintenance;
        self.rederive();
    }

    pub(crate) fn rederive(&mut self) {
        let daily = derive(
            self.price_per_hour,
            self.fuel_cost_per_hour,
            self.maintenance_cost_per_hour,
        );
        self.daily_revenue = daily.revenue;
        self.daily_fuel_cost = daily.fuel_cost;
        self.daily_maintenance_cost = daily.maintenance_cost;
        self.daily_profit = daily.profit;
    }
}
