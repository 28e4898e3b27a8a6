// Demo data service - Synthetic bookings and feedback for the current fleet
use crate::domain::booking::{Booking, Feedback};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

const CUSTOMER_COUNT: usize = 10;

const FEEDBACK_MESSAGES: [&str; 5] = [
    "Excellent service!",
    "Very comfortable ride.",
    "Driver was punctual.",
    "Will book again.",
    "Loved the experience!",
];

pub fn generate_bookings<R: Rng>(rng: &mut R, vehicles: &[String]) -> Vec<Booking> {
    if vehicles.is_empty() {
        return Vec::new();
    }

    (1..=CUSTOMER_COUNT)
        .filter_map(|i| {
            let vehicle = vehicles.choose(rng)?.clone();
            Some(Booking {
                customer_name: format!("Customer {}", i),
                vehicle,
                hours_booked: rng.gen_range(4..=9),
                total_cost: rng.gen_range(500..=2000),
            })
        })
        .collect()
}

pub fn generate_feedback<R: Rng>(rng: &mut R, vehicles: &[String]) -> Vec<Feedback> {
    (1..=CUSTOMER_COUNT)
        .filter_map(|i| {
            let vehicle = vehicles.choose(rng)?.clone();
            let feedback = FEEDBACK_MESSAGES.choose(rng)?;
            Some(Feedback {
                customer_name: format!("Customer {}", i),
                vehicle,
                rating: rng.gen_range(3..=5),
                feedback: feedback.to_string(),
            })
        })
        .collect()
}

/// Produces a fresh batch of synthetic rows on every call.
#[derive(Clone)]
pub struct DemoDataService {
    rng: Arc<Mutex<StdRng>>,
}

impl DemoDataService {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn bookings(&self, vehicles: &[String]) -> Vec<Booking> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_bookings(&mut *rng, vehicles)
    }

    pub fn feedback(&self, vehicles: &[String]) -> Vec<Feedback> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_feedback(&mut *rng, vehicles)
    }
}
