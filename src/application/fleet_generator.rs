// Synthetic fleet generation
use crate::domain::fleet::FleetLedger;
use crate::domain::vehicle::{HourlyRates, VehicleRecord, VehicleType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Inclusive value ranges used when inventing a vehicle of one type.
#[derive(Debug, Clone)]
pub struct VehicleProfile {
    pub capacity: RangeInclusive<u32>,
    pub price: RangeInclusive<u32>,
    pub fuel: RangeInclusive<u32>,
    pub maintenance: RangeInclusive<u32>,
}

impl VehicleProfile {
    pub fn for_type(vehicle_type: VehicleType) -> Self {
        match vehicle_type {
            VehicleType::Sprinter => Self {
                capacity: 8..=12,
                price: 100..=150,
                fuel: 20..=30,
                maintenance: 10..=20,
            },
            VehicleType::PartyBus => Self {
                capacity: 20..=30,
                price: 200..=300,
                fuel: 40..=60,
                maintenance: 20..=30,
            },
        }
    }
}

pub trait FleetGenerator: Send {
    /// Build a fresh ledger: sprinters first, then party buses.
    fn generate(&mut self, sprinters: usize, party_buses: usize) -> FleetLedger;
}

pub struct SyntheticFleetGenerator<R: Rng> {
    rng: R,
    image: String,
}

impl SyntheticFleetGenerator<StdRng> {
    /// A fixed seed gives the same fleet on every start.
    pub fn from_seed(seed: Option<u64>, image: String) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, image)
    }
}

impl<R: Rng> SyntheticFleetGenerator<R> {
    pub fn new(rng: R, image: String) -> Self {
        Self { rng, image }
    }

    fn vehicle(&mut self, vehicle_type: VehicleType, number: usize) -> VehicleRecord {
        let profile = VehicleProfile::for_type(vehicle_type);
        let capacity = self.rng.gen_range(profile.capacity);
        let rates = HourlyRates {
            price: f64::from(self.rng.gen_range(profile.price)),
            fuel: f64::from(self.rng.gen_range(profile.fuel)),
            maintenance: f64::from(self.rng.gen_range(profile.maintenance)),
        };

        VehicleRecord::new(
            format!("{} {}", vehicle_type.label(), number),
            vehicle_type,
            capacity,
            rates,
            self.image.clone(),
        )
    }
}

impl<R: Rng + Send> FleetGenerator for SyntheticFleetGenerator<R> {
    fn generate(&mut self, sprinters: usize, party_buses: usize) -> FleetLedger {
        let mut records = Vec::with_capacity(sprinters + party_buses);
        for i in 1..=sprinters {
            records.push(self.vehicle(VehicleType::Sprinter, i));
        }
        for i in 1..=party_buses {
            records.push(self.vehicle(VehicleType::PartyBus, i));
        }

        tracing::debug!(
            "Generated synthetic fleet: {} sprinters, {} party buses",
            sprinters,
            party_buses
        );

        FleetLedger::from_records(records)
    }
}
