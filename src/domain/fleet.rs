// Fleet ledger - the in-memory table of vehicles
use super::vehicle::VehicleRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetLedger {
    records: Vec<VehicleRecord>,
}

impl FleetLedger {
    pub fn from_records(records: Vec<VehicleRecord>) -> Self {
        let mut ledger = Self { records };
        ledger.derive_all();
        ledger
    }

    /// Add a vehicle at the end of the ledger. Earlier rows are untouched.
    pub fn append(&mut self, record: VehicleRecord) {
        self.records.push(record);
    }

    /// Recompute every derived column from the stored rates.
    pub fn derive_all(&mut self) {
        for record in &mut self.records {
            record.rederive();
        }
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_daily_revenue(&self) -> f64 {
        self.records.iter().map(|r| r.daily().revenue).sum()
    }

    pub fn total_daily_profit(&self) -> f64 {
        self.records.iter().map(|r| r.daily().profit).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::{HourlyRates, VehicleType};

    fn record(name: &str, price: f64, fuel: f64, maintenance: f64) -> VehicleRecord {
        VehicleRecord::new(
            name.to_string(),
            VehicleType::Sprinter,
            10,
            HourlyRates {
                price,
                fuel,
                maintenance,
            },
            "placeholder".to_string(),
        )
    }

    fn sample_ledger() -> FleetLedger {
        FleetLedger::from_records(vec![
            record("Sprinter 1", 120.0, 25.0, 15.0),
            record("Sprinter 2", 150.0, 30.0, 20.0),
        ])
    }

    #[test]
    fn test_append_preserves_existing_rows() {
        let mut ledger = sample_ledger();
        let before = ledger.records().to_vec();

        ledger.append(record("Custom", 50.0, 5.0, 5.0));

        assert_eq!(ledger.len(), before.len() + 1);
        assert_eq!(&ledger.records()[..before.len()], before.as_slice());
        assert_eq!(ledger.records()[2].name(), "Custom");
        assert_eq!(ledger.records()[2].daily().profit, 320.0);
    }

    #[test]
    fn test_derive_all_is_idempotent() {
        let mut ledger = sample_ledger();
        ledger.derive_all();
        let first = ledger.clone();
        ledger.derive_all();

        assert_eq!(ledger, first);
    }

    #[test]
    fn test_totals_sum_derived_columns() {
        let ledger = sample_ledger();

        // 640 + (1200 - 240 - 160)
        assert_eq!(ledger.total_daily_profit(), 1440.0);
        assert_eq!(ledger.total_daily_revenue(), 2160.0);
        assert_eq!(
            ledger.total_daily_profit(),
            ledger.records().iter().map(|r| r.daily().profit).sum::<f64>()
        );
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = FleetLedger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_daily_profit(), 0.0);
        assert!(ledger.names().is_empty());
    }
}
