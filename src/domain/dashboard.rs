// Dashboard view models
use super::fleet::FleetLedger;
use super::vehicle::VehicleType;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub title: &'static str,
    pub path: &'static str,
}

pub const NAVIGATION: [NavEntry; 7] = [
    NavEntry { title: "Home", path: "/" },
    NavEntry { title: "Inventory", path: "/inventory" },
    NavEntry { title: "Rental Prices", path: "/rental-prices" },
    NavEntry { title: "Profit Metrics", path: "/profit-metrics" },
    NavEntry { title: "Customer Bookings", path: "/bookings" },
    NavEntry { title: "Add a New Vehicle", path: "/vehicles" },
    NavEntry { title: "Customer Feedback", path: "/feedback" },
];

#[derive(Debug, Clone, Serialize)]
pub struct HeroImage {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub title: String,
    pub welcome: String,
    pub image: HeroImage,
    pub navigation: Vec<NavEntry>,
}

impl HomePage {
    pub fn new(image_url: String) -> Self {
        Self {
            title: "VIP Sprinter & Party Bus Booking".to_string(),
            welcome: "Welcome to the VIP Sprinter and Party Bus Booking App! Manage your fleet, \
                      analyze profits, view customer bookings, and more. Our goal is to streamline \
                      your business operations and maximize profits."
                .to_string(),
            image: HeroImage {
                url: image_url,
                caption: "Luxury Vehicles for Every Occasion".to_string(),
            },
            navigation: NAVIGATION.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Choice,
    Number,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<VehicleType>,
}

impl FormField {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            minimum: None,
            step: None,
            options: Vec::new(),
        }
    }

    pub fn choice(name: &'static str, label: &'static str, options: Vec<VehicleType>) -> Self {
        Self {
            options,
            kind: FieldKind::Choice,
            ..Self::text(name, label)
        }
    }

    pub fn number(name: &'static str, label: &'static str, minimum: f64, step: f64) -> Self {
        Self {
            kind: FieldKind::Number,
            minimum: Some(minimum),
            step: Some(step),
            ..Self::text(name, label)
        }
    }
}

/// The add-vehicle page: what to submit to `POST /vehicles`.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleForm {
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
}

impl VehicleForm {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            title: "Add a New Vehicle".to_string(),
            description: "Use the form below to add a new vehicle to your fleet. \
                          Values below a field's minimum are raised to it."
                .to_string(),
            fields,
        }
    }
}

/// Pricing columns of a single vehicle.
#[derive(Debug, Clone, Serialize)]
pub struct RentalPriceRow {
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub capacity: u32,
    pub price_per_hour: f64,
    pub daily_revenue: f64,
    pub daily_profit: f64,
}

pub fn rental_prices(ledger: &FleetLedger) -> Vec<RentalPriceRow> {
    ledger
        .records()
        .iter()
        .map(|r| RentalPriceRow {
            name: r.name().to_string(),
            vehicle_type: r.vehicle_type(),
            capacity: r.capacity(),
            price_per_hour: r.rates().price,
            daily_revenue: r.daily().revenue,
            daily_profit: r.daily().profit,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricTile {
    pub title: String,
    pub value: f64,
    pub formatted: String,
}

impl MetricTile {
    pub fn currency(title: &str, value: f64) -> Self {
        Self {
            title: title.to_string(),
            value,
            formatted: format_currency(value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfitMetrics {
    pub total_daily_revenue: MetricTile,
    pub total_daily_profit: MetricTile,
    pub daily_profit_by_vehicle: Vec<ChartPoint>,
}

impl ProfitMetrics {
    pub fn from_ledger(ledger: &FleetLedger) -> Self {
        Self {
            total_daily_revenue: MetricTile::currency(
                "Total Daily Revenue",
                ledger.total_daily_revenue(),
            ),
            total_daily_profit: MetricTile::currency(
                "Total Daily Profit",
                ledger.total_daily_profit(),
            ),
            daily_profit_by_vehicle: ledger
                .records()
                .iter()
                .map(|r| ChartPoint {
                    name: r.name().to_string(),
                    value: r.daily().profit,
                })
                .collect(),
        }
    }
}

/// Format as dollars with thousands separators, e.g. `$12,345.00`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::{HourlyRates, VehicleRecord};

    fn ledger() -> FleetLedger {
        FleetLedger::from_records(vec![
            VehicleRecord::new(
                "Sprinter 1".to_string(),
                VehicleType::Sprinter,
                10,
                HourlyRates {
                    price: 120.0,
                    fuel: 25.0,
                    maintenance: 15.0,
                },
                "img".to_string(),
            ),
            VehicleRecord::new(
                "Party Bus 1".to_string(),
                VehicleType::PartyBus,
                25,
                HourlyRates {
                    price: 250.0,
                    fuel: 50.0,
                    maintenance: 25.0,
                },
                "img".to_string(),
            ),
        ])
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(640.0), "$640.00");
        assert_eq!(format_currency(1440.5), "$1,440.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-120.0), "-$120.00");
    }

    #[test]
    fn test_profit_metrics_total_matches_column_sum() {
        let ledger = ledger();
        let metrics = ProfitMetrics::from_ledger(&ledger);

        let column_sum: f64 = metrics.daily_profit_by_vehicle.iter().map(|p| p.value).sum();
        assert_eq!(metrics.total_daily_profit.value, column_sum);
        assert_eq!(metrics.total_daily_profit.value, 640.0 + 1400.0);
        assert_eq!(metrics.total_daily_profit.formatted, "$2,040.00");
        assert_eq!(metrics.total_daily_revenue.value, 960.0 + 2000.0);
    }

    #[test]
    fn test_rental_prices_projection() {
        let rows = rental_prices(&ledger());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Party Bus 1");
        assert_eq!(rows[1].vehicle_type, VehicleType::PartyBus);
        assert_eq!(rows[1].price_per_hour, 250.0);
        assert_eq!(rows[1].daily_revenue, 2000.0);
        assert_eq!(rows[1].daily_profit, 1400.0);
    }

    #[test]
    fn test_home_page_navigation() {
        let home = HomePage::new("https://via.placeholder.com/800x400".to_string());
        assert_eq!(home.navigation.len(), 7);
        assert_eq!(home.navigation[0].path, "/");
        assert_eq!(home.image.caption, "Luxury Vehicles for Every Occasion");
    }

    #[test]
    fn test_form_field_serialization_skips_empty_parts() {
        let text = serde_json::to_value(FormField::text("name", "Vehicle Name")).unwrap();
        assert_eq!(text["kind"], "text");
        assert!(text.get("minimum").is_none());
        assert!(text.get("options").is_none());

        let number = serde_json::to_value(FormField::number("capacity", "Seats", 1.0, 1.0)).unwrap();
        assert_eq!(number["kind"], "number");
        assert_eq!(number["minimum"], 1.0);
    }
}
