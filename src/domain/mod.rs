// Domain layer - Fleet records and the arithmetic over them
pub mod booking;
pub mod dashboard;
pub mod error;
pub mod fleet;
pub mod vehicle;
