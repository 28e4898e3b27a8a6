// Domain errors
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FleetError {
    #[error("{field} must be a finite amount")]
    NonFinite { field: &'static str },
}
