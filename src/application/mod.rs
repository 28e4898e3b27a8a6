// Application layer - Use cases over the fleet ledger
pub mod demo_data;
pub mod fleet_generator;
pub mod fleet_service;
