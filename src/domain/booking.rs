// Customer booking and feedback models
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub customer_name: String,
    pub vehicle: String,
    pub hours_booked: u32,
    pub total_cost: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub customer_name: String,
    pub vehicle: String,
    pub rating: u8,
    pub feedback: String,
}

/// Rows of synthetic data together with the moment they were produced.
#[derive(Debug, Clone, Serialize)]
pub struct Generated<T> {
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<T>,
}

impl<T> Generated<T> {
    pub fn now(rows: Vec<T>) -> Self {
        Self {
            generated_at: Utc::now(),
            rows,
        }
    }
}
